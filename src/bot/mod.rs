pub mod driver;

pub use driver::{CycleReport, Phase, PollDriver, STARTUP_MESSAGE};
