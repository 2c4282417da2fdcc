use thiserror::Error;

/// Fatal startup failures. The loop is never entered when one of these occurs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures of a single upstream request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach {endpoint}: {source}")]
    Connectivity {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream answered {status} {reason}: {body}")]
    UpstreamStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("upstream body is not valid JSON: {0}")]
    Decode(String),
}

/// Top-level response shape violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed response: {0}")]
    Shape(&'static str),

    #[error("response is missing required key \"{0}\"")]
    MissingField(&'static str),
}

/// A listing that cannot be turned into a message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("listing {listing_id} has no \"{field}\"")]
    MissingField {
        listing_id: String,
        field: &'static str,
    },
}

impl RenderError {
    pub fn field(&self) -> &'static str {
        match self {
            RenderError::MissingField { field, .. } => field,
        }
    }
}

/// The messaging channel did not accept a message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("messaging transport failed: {0}")]
    Transport(String),

    #[error("message rejected ({status}): {description}")]
    Rejected { status: u16, description: String },
}

/// Anything that aborts the current cycle but not the process.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
