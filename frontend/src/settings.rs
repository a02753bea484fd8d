use serde::{Deserialize, Serialize};

use crate::storage::{load_json, save_json, KeyValueStore, SETTINGS_KEY};

pub const CURRENCIES: [(&str, &str); 5] = [
    ("USD", "USD ($)"),
    ("EUR", "EUR (€)"),
    ("GBP", "GBP (£)"),
    ("JPY", "JPY (¥)"),
    ("PHP", "PHP (₱)"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::for_currency("USD")
    }
}

impl AppSettings {
    pub fn for_currency(code: &str) -> Self {
        Self {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "PHP" => "₱",
        _ => "$",
    }
}

pub fn load_settings(storage: &impl KeyValueStore) -> AppSettings {
    load_json(storage, SETTINGS_KEY).unwrap_or_default()
}

pub fn save_settings(storage: &impl KeyValueStore, settings: &AppSettings) {
    if let Err(err) = save_json(storage, SETTINGS_KEY, settings) {
        tracing::error!(%err, "failed to save settings");
    }
}
