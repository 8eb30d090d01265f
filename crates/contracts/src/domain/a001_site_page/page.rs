use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::RouteError;

/// One of the mutually exclusive sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    About,
    Spares,
    Contact,
}

impl PageId {
    /// Key used for the section id and the `data-page` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Spares => "spares",
            PageId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Spares => "Spares",
            PageId::Contact => "Contact",
        }
    }

    /// Document title while this page is active.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Mobin Engineers - Precision Injection Molding Spare Parts",
            PageId::About => "About Us - Mobin Engineers",
            PageId::Spares => "Spare Parts - Mobin Engineers",
            PageId::Contact => "Contact Us - Mobin Engineers",
        }
    }

    pub fn all() -> [PageId; 4] {
        [PageId::Home, PageId::About, PageId::Spares, PageId::Contact]
    }
}

/// Title lookup for a raw key, falling back to the home title.
pub fn title_for(key: &str) -> &'static str {
    key.parse::<PageId>().unwrap_or_default().title()
}

impl FromStr for PageId {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageId::Home),
            "about" => Ok(PageId::About),
            "spares" => Ok(PageId::Spares),
            "contact" => Ok(PageId::Contact),
            other => Err(RouteError::UnknownPage(other.to_string())),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_parse_back() {
        for page in PageId::all() {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            "Home".parse::<PageId>(),
            Err(RouteError::UnknownPage("Home".into()))
        );
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(title_for("spares"), "Spare Parts - Mobin Engineers");
        assert_eq!(
            title_for("careers"),
            "Mobin Engineers - Precision Injection Molding Spare Parts"
        );
    }
}
