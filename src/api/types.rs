use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque upstream identifier. Adzuna sends it as a string, but numbers are
/// accepted and normalised so equality checks stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) if !text.is_empty() => Ok(ListingId(text)),
            RawId::Text(_) => Err(serde::de::Error::custom("empty listing id")),
            RawId::Number(number) => Ok(ListingId(number.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
}

/// One job posting as returned in `results`.
///
/// Only `id` is mandatory at decode time. The other fields never fail
/// decoding: a value of the wrong shape becomes `None` and is reported by
/// name when the listing is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_display_name")]
    pub location: Option<DisplayName>,
    #[serde(default, deserialize_with = "lenient_display_name")]
    pub company: Option<DisplayName>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub redirect_url: Option<String>,
}

/// Scalars become text; `null`, arrays and objects become `None`.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

fn lenient_display_name<'de, D>(deserializer: D) -> Result<Option<DisplayName>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(mut fields)) => Some(DisplayName {
            display_name: fields.remove("display_name").and_then(text_of),
        }),
        _ => None,
    })
}

impl Listing {
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref()?.display_name.as_deref()
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref()?.display_name.as_deref()
    }
}
