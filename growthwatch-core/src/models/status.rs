use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height-for-age status, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusLabel {
    #[serde(rename = "severely short")]
    SeverelyShort,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "normal")]
    Normal,
}

impl StatusLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::SeverelyShort => "severely short",
            StatusLabel::Short => "short",
            StatusLabel::Normal => "normal",
        }
    }

    /// True for the labels that indicate stunting.
    pub fn is_stunted(self) -> bool {
        self < StatusLabel::Normal
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "severely short" => Ok(StatusLabel::SeverelyShort),
            "short" => Ok(StatusLabel::Short),
            "normal" => Ok(StatusLabel::Normal),
            _ => Err(format!("Unknown status label '{}'", s)),
        }
    }
}
