use std::sync::Arc;

use crate::api::{Listing, MessageChannel};
use crate::core::{DeliveryError, RenderError};

/// Formats one listing as a single-line message.
///
/// Fields are checked in message order so the first missing one is named.
/// The link comes from `redirect_url` and is reported as `url`.
pub fn render(listing: &Listing) -> Result<String, RenderError> {
    let missing = |field: &'static str| RenderError::MissingField {
        listing_id: listing.id.to_string(),
        field,
    };

    let title = listing.title.as_deref().ok_or_else(|| missing("title"))?;
    let location = listing.location_name().ok_or_else(|| missing("location"))?;
    let company = listing.company_name().ok_or_else(|| missing("company"))?;
    let url = listing
        .redirect_url
        .as_deref()
        .ok_or_else(|| missing("url"))?;

    Ok(format!(
        "{} in {}, for company: {}. Link: {}",
        title, location, company, url
    ))
}

/// Sends rendered messages to one fixed destination.
#[derive(Clone)]
pub struct Notifier {
    channel: Arc<dyn MessageChannel>,
    destination: String,
}

impl Notifier {
    pub fn new(channel: Arc<dyn MessageChannel>, destination: impl Into<String>) -> Self {
        Self {
            channel,
            destination: destination.into(),
        }
    }

    /// Best-effort, at-most-once. Callers log the error and move on.
    pub async fn deliver(&self, message: &str) -> Result<(), DeliveryError> {
        tracing::debug!("Sending message to {}: {}", self.destination, message);

        self.channel
            .send_message(&self.destination, message)
            .await?;

        tracing::debug!("Message delivered to {}", self.destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DisplayName, ListingId, MockMessageChannel};

    fn full_listing() -> Listing {
        Listing {
            id: ListingId::new("1"),
            title: Some("Python Engineer".to_string()),
            location: Some(DisplayName {
                display_name: Some("Edinburgh, Scotland".to_string()),
            }),
            company: Some(DisplayName {
                display_name: Some("Fake Company".to_string()),
            }),
            redirect_url: Some("https://example.test/x".to_string()),
        }
    }

    #[test]
    fn test_render_format() {
        assert_eq!(
            render(&full_listing()).unwrap(),
            "Python Engineer in Edinburgh, Scotland, for company: Fake Company. Link: https://example.test/x"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let listing = full_listing();
        assert_eq!(render(&listing).unwrap(), render(&listing).unwrap());
    }

    #[test]
    fn test_render_names_each_missing_field() {
        let cases: [(&str, fn(&mut Listing)); 4] = [
            ("title", |l| l.title = None),
            ("location", |l| l.location = None),
            ("company", |l| l.company = None),
            ("url", |l| l.redirect_url = None),
        ];

        for (field, strip) in cases {
            let mut listing = full_listing();
            strip(&mut listing);
            let err = render(&listing).unwrap_err();
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn test_render_location_without_display_name() {
        let mut listing = full_listing();
        listing.location = Some(DisplayName { display_name: None });
        assert_eq!(render(&listing).unwrap_err().field(), "location");
    }

    #[tokio::test]
    async fn test_deliver_uses_destination() {
        let mut channel = MockMessageChannel::new();
        channel
            .expect_send_message()
            .withf(|destination, text| destination == "-100" && text == "hello")
            .times(1)
            .returning(|_, _| Ok(()));

        let notifier = Notifier::new(Arc::new(channel), "-100");
        tokio_test::assert_ok!(notifier.deliver("hello").await);
    }

    #[tokio::test]
    async fn test_deliver_surfaces_channel_error() {
        let mut channel = MockMessageChannel::new();
        channel.expect_send_message().returning(|_, _| {
            Err(DeliveryError::Rejected {
                status: 400,
                description: "Bad Request: chat not found".to_string(),
            })
        });

        let notifier = Notifier::new(Arc::new(channel), "-100");
        let err = notifier.deliver("hello").await.unwrap_err();
        assert!(err.to_string().contains("chat not found"));
    }
}
