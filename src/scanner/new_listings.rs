use crate::api::{Listing, ListingId};

/// Marker of the newest listing already notified. Lives only in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    last_seen_id: Option<ListingId>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen_id(&self) -> Option<&ListingId> {
        self.last_seen_id.as_ref()
    }

    pub fn commit(&mut self, last_seen_id: Option<ListingId>) {
        if last_seen_id.is_some() {
            self.last_seen_id = last_seen_id;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Listings strictly newer than the previous marker, newest first.
    pub new_listings: &'a [Listing],
    /// Marker to carry into the next cycle.
    pub last_seen_id: Option<ListingId>,
}

/// Picks the listings newer than `last_seen_id` from a newest-first batch.
///
/// With no marker, or when the marker is no longer in the batch, the whole
/// batch counts as new. An empty batch leaves the marker untouched.
pub fn select_new<'a>(listings: &'a [Listing], last_seen_id: Option<&ListingId>) -> Selection<'a> {
    let cutoff = last_seen_id
        .and_then(|seen| listings.iter().position(|listing| &listing.id == seen))
        .unwrap_or(listings.len());

    if let Some(seen) = last_seen_id {
        if cutoff == listings.len() && !listings.is_empty() {
            tracing::warn!(
                "Last seen listing {} is no longer in the batch, treating all {} as new",
                seen,
                listings.len()
            );
        }
    }

    Selection {
        new_listings: &listings[..cutoff],
        last_seen_id: listings
            .first()
            .map(|listing| listing.id.clone())
            .or_else(|| last_seen_id.cloned()),
    }
}
