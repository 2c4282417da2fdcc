#![allow(dead_code)]

use std::collections::HashMap;

use jobsearch_bot::core::Config;
use serde_json::{json, Value};

/// Config pointing both collaborators at a mock server.
pub fn config_for(server_uri: &str) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("TELEGRAM_TOKEN", "123:secret-token".to_string()),
        ("TELEGRAM_CHAT_ID", "-100".to_string()),
        ("API_KEY", "secret-key".to_string()),
        ("API_ID", "app-id".to_string()),
        ("ADZUNA_COUNTRY", "gb".to_string()),
        ("ADZUNA_BASE_URL", server_uri.to_string()),
        ("TELEGRAM_API_URL", server_uri.to_string()),
        ("REQUEST_TIMEOUT_SECS", "2".to_string()),
    ]);

    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

pub fn listing(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Python Engineer {id}"),
        "location": {"display_name": "Edinburgh, Scotland"},
        "company": {"display_name": "Fake Company"},
        "redirect_url": format!("https://example.test/{id}")
    })
}
