//! Validation Helpers - Colors and Text Fields
//!
//! Colors are validated and normalized before they reach the pipeline, so
//! the substitution step can treat them as trusted literals. Text-field
//! checks produce warnings, never errors.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern accepted for user-supplied colors: six hex digits, `#` optional.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").unwrap());

/// Maximum number of whitespace-delimited words in the logo phrase.
pub const MAX_LOGO_WORDS: usize = 2;

/// Rule name attached to logo word-count warnings.
pub const RULE_LOGO_WORD_COUNT: &str = "logo_word_count";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid hex color {0:?}: expected six hex digits with an optional leading '#'")]
pub struct ColorParseError(pub String);

/// A six-hex-digit RGB color, normalized to carry a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        if !HEX_COLOR.is_match(value) {
            return Err(ColorParseError(value.to_string()));
        }
        let normalized = if value.starts_with('#') {
            value.to_string()
        } else {
            format!("#{value}")
        };
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// The three user-facing colors threaded through one customization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTriple {
    /// Replaces the `#A8D48C` placeholder.
    pub main: HexColor,
    /// Replaces the `#88A585` placeholder.
    pub secondary: HexColor,
    /// Fill of the logo text class.
    pub text: HexColor,
}

impl Default for ColorTriple {
    fn default() -> Self {
        Self {
            main: HexColor(String::from("#A8D48C")),
            secondary: HexColor(String::from("#88A585")),
            text: HexColor(String::from("#F5457F")),
        }
    }
}

/// Non-fatal condition surfaced to the caller alongside the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warning {
    pub rule: String,
    pub message: String,
}

/// Split the logo phrase into at most [`MAX_LOGO_WORDS`] words.
///
/// Extra words are dropped; the caller gets a warning recording the cut.
pub fn split_logo_words(phrase: &str) -> (Vec<&str>, Option<Warning>) {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() <= MAX_LOGO_WORDS {
        return (words, None);
    }

    let warning = Warning {
        rule: RULE_LOGO_WORD_COUNT.to_string(),
        message: format!(
            "logo phrase supports max {MAX_LOGO_WORDS} words; using the first {MAX_LOGO_WORDS}"
        ),
    };
    (words[..MAX_LOGO_WORDS].to_vec(), Some(warning))
}
