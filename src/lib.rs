//! Polls the Adzuna job search API and forwards newly posted listings to a
//! Telegram chat.

pub mod api;
pub mod bot;
pub mod core;
pub mod notify;
pub mod scanner;
