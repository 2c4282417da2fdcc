pub mod new_listings;
pub mod validator;

pub use new_listings::{select_new, PollState, Selection};
pub use validator::{decode_listings, validate};
