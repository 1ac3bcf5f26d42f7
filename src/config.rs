/// Front-end configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Print file letters and rank numbers around the board.
    pub show_coordinates: bool,
    /// Print the threatened-piece count under the threat board.
    pub threat_summary: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            log_filter: lookup("VARIANT_CHESS_LOG").unwrap_or(defaults.log_filter),
            show_coordinates: lookup("VARIANT_CHESS_COORDS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_coordinates),
            threat_summary: lookup("VARIANT_CHESS_THREAT_SUMMARY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.threat_summary),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "variant_chess=info".to_string(),
            show_coordinates: true,
            threat_summary: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
