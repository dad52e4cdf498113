use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Short machine-readable identifier for a rights statement (e.g., `NoC-US`).
///
/// Codes are the primary key of the vocabulary: the index maps each code to
/// its own entry, and consumers store codes alongside catalogued objects.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyCode(pub String);

/// Identifier selecting the badge asset rendered for a statement.
///
/// Slug resolution happens in consuming applications; this crate only
/// guarantees the slug is present and carries a known family prefix.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSlug(pub String);

impl Borrow<str> for VocabularyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VocabularyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Badge family a statement belongs to, mirrored from the image slug prefix.
///
/// The vocabulary groups its statements into three families; badge assets are
/// named `<family>-<qualifier>`. The set is closed, so unknown prefixes are
/// rejected at index construction instead of being carried as a fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StatementFamily {
    InCopyright,
    NoCopyright,
    Other,
}

impl StatementFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementFamily::InCopyright => "InC",
            StatementFamily::NoCopyright => "NoC",
            StatementFamily::Other => "Other",
        }
    }

    /// Parse a family from its slug-prefix spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "InC" => Some(StatementFamily::InCopyright),
            "NoC" => Some(StatementFamily::NoCopyright),
            "Other" => Some(StatementFamily::Other),
            _ => None,
        }
    }

    /// Classify an image slug by its leading segment.
    ///
    /// Bare family slugs (`InC`, `NoC-US`'s `NoC`) and qualified ones
    /// (`Other-UNKNOWN`) both resolve through the text before the first `-`.
    pub fn from_slug(slug: &ImageSlug) -> Option<Self> {
        let prefix = slug.0.split('-').next().unwrap_or("");
        Self::parse(prefix)
    }
}

impl Serialize for StatementFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatementFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown statement family '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_transparently() {
        let code = VocabularyCode("NoC-OKLR".to_string());
        let serialized = serde_json::to_string(&code).unwrap();
        assert_eq!(serialized, "\"NoC-OKLR\"");
        let parsed: VocabularyCode = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, code);
    }

    #[test]
    fn family_round_trips_and_rejects_unknown() {
        let family = StatementFamily::NoCopyright;
        let json = serde_json::to_string(&family).unwrap();
        assert_eq!(json, "\"NoC\"");
        let back: StatementFamily = serde_json::from_str(&json).unwrap();
        assert_eq!(back, family);

        let err = serde_json::from_str::<StatementFamily>("\"PD\"").unwrap_err();
        assert!(err.to_string().contains("unknown statement family"));
    }

    #[test]
    fn family_from_slug_uses_leading_segment() {
        let qualified = ImageSlug("Other-NOTEVALUATED".to_string());
        assert_eq!(
            StatementFamily::from_slug(&qualified),
            Some(StatementFamily::Other)
        );

        let bare = ImageSlug("InC".to_string());
        assert_eq!(
            StatementFamily::from_slug(&bare),
            Some(StatementFamily::InCopyright)
        );

        let unknown = ImageSlug("CC-BY".to_string());
        assert_eq!(StatementFamily::from_slug(&unknown), None);
    }
}
