pub mod notifier;

pub use notifier::{render, Notifier};
