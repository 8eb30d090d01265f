use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub timing: TimingConfig,
    pub reveal: RevealConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteSection {
    pub brand: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    /// Auto-dismiss delay of the confirmation banner.
    pub confirmation_dismiss_ms: u32,
    /// Delay before the quote form's first field receives focus.
    pub focus_delay_ms: u32,
    /// `window.scrollY` above which the navbar is drawn as scrolled.
    pub navbar_scroll_threshold: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[site]
brand = "Mobin Engineers"
tagline = "Precision Injection Molding Spare Parts"
phone = "+91 98765 43210"
email = "info@mobinengineers.com"
address = "Industrial Area, Phase II, Pune, Maharashtra, India"

[timing]
confirmation_dismiss_ms = 5000
focus_delay_ms = 100
navbar_scroll_threshold = 50.0

[reveal]
threshold = 0.1
root_margin = "0px 0px -50px 0px"
"#;

impl SiteConfig {
    /// Parse the embedded configuration.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection {
                brand: "Mobin Engineers".into(),
                tagline: "Precision Injection Molding Spare Parts".into(),
                phone: "+91 98765 43210".into(),
                email: "info@mobinengineers.com".into(),
                address: "Industrial Area, Phase II, Pune, Maharashtra, India".into(),
            },
            timing: TimingConfig {
                confirmation_dismiss_ms: 5000,
                focus_delay_ms: 100,
                navbar_scroll_threshold: 50.0,
            },
            reveal: RevealConfig {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::load();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.timing.confirmation_dismiss_ms, 5000);
        assert_eq!(config.timing.focus_delay_ms, 100);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_embedded_config_matches_fallback() {
        assert_eq!(SiteConfig::load().unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(SiteConfig::from_toml("[site]\nbrand = \"x\"").is_err());
    }
}
