//! Tone module - presentation styles for the summary intro

use serde::{Deserialize, Serialize};

/// Presentation tone for a summary
///
/// Each tone selects one canned intro sentence. Tones are matched
/// case-insensitively; anything unrecognized falls back to Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Neutral phrasing (default)
    Normal,

    /// Conversational phrasing
    Casual,

    /// Business phrasing
    Formal,

    /// Minimal phrasing
    Concise,
}

impl Tone {
    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Normal => "Normal",
            Tone::Casual => "Casual",
            Tone::Formal => "Formal",
            Tone::Concise => "Concise",
        }
    }

    /// The canned intro sentence for this tone
    pub fn intro(&self) -> &'static str {
        match self {
            Tone::Normal => "Here is a summary:",
            Tone::Casual => "Hey! Here's the gist:",
            Tone::Formal => "The core information follows:",
            Tone::Concise => "Key points:",
        }
    }

    /// Parse a tone from a string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Tone::Normal),
            "casual" => Some(Tone::Casual),
            "formal" => Some(Tone::Formal),
            "concise" => Some(Tone::Concise),
            _ => None,
        }
    }

    /// Parse a tone, defaulting to Normal for unrecognized input
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or(Tone::Normal)
    }

    /// All tone names, in the order the tool schema advertises them
    pub fn names() -> [&'static str; 4] {
        ["Casual", "Formal", "Normal", "Concise"]
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Normal
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tone: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_mapping() {
        assert_eq!(Tone::Normal.intro(), "Here is a summary:");
        assert_eq!(Tone::Casual.intro(), "Hey! Here's the gist:");
        assert_eq!(Tone::Formal.intro(), "The core information follows:");
        assert_eq!(Tone::Concise.intro(), "Key points:");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Tone::parse("formal"), Some(Tone::Formal));
        assert_eq!(Tone::parse("FORMAL"), Some(Tone::Formal));
        assert_eq!(Tone::parse("Casual"), Some(Tone::Casual));
    }

    #[test]
    fn test_unrecognized_defaults_to_normal() {
        assert_eq!(Tone::parse_or_default("sarcastic"), Tone::Normal);
        assert_eq!(Tone::parse_or_default(""), Tone::Normal);
    }

    #[test]
    fn test_from_str() {
        let tone: Tone = "concise".parse().unwrap();
        assert_eq!(tone, Tone::Concise);
        assert!("whimsical".parse::<Tone>().is_err());
    }
}
