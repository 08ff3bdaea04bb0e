use anyhow::{Context, Result};

/// Rendering defaults loaded from environment variables.
/// Every variable is optional; command-line flags take precedence.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether disclosure groups allow several open sections at once.
    pub allow_multiple: bool,
    /// Section ids opened before any toggles are applied.
    pub open_sections: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            allow_multiple: match std::env::var("REVIEW_ALLOW_MULTIPLE") {
                Ok(raw) => parse_bool(&raw).with_context(|| {
                    format!("REVIEW_ALLOW_MULTIPLE must be a boolean, got '{raw}'")
                })?,
                Err(_) => true,
            },
            open_sections: std::env::var("REVIEW_OPEN_SECTIONS")
                .map(|raw| parse_section_list(&raw))
                .unwrap_or_default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_section_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
