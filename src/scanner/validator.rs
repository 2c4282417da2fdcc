use serde::Deserialize;
use serde_json::Value;

use crate::api::Listing;
use crate::core::ValidationError;

pub const RESULTS_KEY: &str = "results";

/// Checks the top-level shape of an upstream response and returns the
/// `results` entries. Individual entries are not inspected here.
pub fn validate(document: &Value) -> Result<&[Value], ValidationError> {
    tracing::debug!("Validating API response shape");

    let map = document
        .as_object()
        .ok_or(ValidationError::Shape("not a mapping"))?;

    let results = map
        .get(RESULTS_KEY)
        .ok_or(ValidationError::MissingField(RESULTS_KEY))?;

    let entries = results
        .as_array()
        .ok_or(ValidationError::Shape("results not a list"))?;

    tracing::debug!("API response shape ok ({} entries)", entries.len());
    Ok(entries)
}

/// Decodes each entry into a [`Listing`], keeping upstream order.
///
/// Entries that are not objects or lack a usable `id` are logged and
/// dropped. Other fields are checked later, at render time.
pub fn decode_listings(entries: &[Value]) -> Vec<Listing> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            match Listing::deserialize(entry) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!("⚠️  Skipping undecodable listing at position {}: {}", position, e);
                    None
                }
            }
        })
        .collect()
}
