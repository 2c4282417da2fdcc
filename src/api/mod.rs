pub mod adzuna;
pub mod telegram;
pub mod types;

pub use adzuna::AdzunaClient;
pub use telegram::TelegramClient;
pub use types::*;

use async_trait::async_trait;

use crate::core::{DeliveryError, FetchError};

/// Upstream listing source. One call per cycle, no retries inside.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Returns the decoded response body as an untyped JSON document.
    async fn fetch(&self) -> Result<serde_json::Value, FetchError>;
}

/// Outbound messaging channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send_message(&self, destination: &str, text: &str) -> Result<(), DeliveryError>;
}
