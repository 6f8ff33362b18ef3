use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structures::ConfigError;

// Primary subtag of 2-3 letters, then alphanumeric subtags joined by '_' or '-'.
static LOCALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:[_-][A-Za-z0-9]{2,8})*$").expect("locale regex"));

/// Application locale, e.g. `en_US`.
///
/// Only validated tags are representable, so the value can be spliced into
/// markup without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag usable as an HTML `lang` attribute: `en_US` becomes `en-US`.
    pub fn html_lang(&self) -> String {
        self.0.replace('_', "-")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if LOCALE_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ConfigError::InvalidLocale(s.to_string()))
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscores_become_hyphens() {
        let locale: Locale = "en_US".parse().unwrap();
        assert_eq!(locale.html_lang(), "en-US");
        assert_eq!(locale.as_str(), "en_US");
    }

    #[test]
    fn accepts_common_tags() {
        for tag in ["en", "pt-BR", "zh-Hant-TW", "es_419"] {
            assert!(tag.parse::<Locale>().is_ok(), "{tag} should parse");
        }
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "e", "en US", "<script>", "en_", "en\"lang"] {
            assert_eq!(
                tag.parse::<Locale>(),
                Err(ConfigError::InvalidLocale(tag.trim().to_string())),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default().html_lang(), "en");
    }
}
