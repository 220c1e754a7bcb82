//! Widget deployment configuration
//!
//! The host page embeds these values at build time and hands them to the
//! widget as JSON on construction. They are deployment settings, never
//! user input.

use serde::Deserialize;

/// Where outbound WhatsApp messages go and who they greet
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Business name used in message greetings
    pub business_name: String,

    /// WhatsApp destination in international, digits-only form
    pub whatsapp_number: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            business_name: "PASA Coffee".to_string(),
            whatsapp_number: String::new(),
        }
    }
}

impl ShareConfig {
    /// Parse config from the host page's JSON blob
    ///
    /// Missing fields fall back to defaults, so a partial config is fine.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = ShareConfig::from_json(
            r#"{"business_name": "Bean There", "whatsapp_number": "971501234567"}"#,
        )
        .unwrap();
        assert_eq!(config.business_name, "Bean There");
        assert_eq!(config.whatsapp_number, "971501234567");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ShareConfig::from_json(r#"{"whatsapp_number": "123"}"#).unwrap();
        assert_eq!(config.business_name, "PASA Coffee");
        assert_eq!(config.whatsapp_number, "123");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(ShareConfig::from_json("not json").is_err());
    }
}
