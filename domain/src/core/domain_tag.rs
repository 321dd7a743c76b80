//! Domain tag value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category label steering strategy selection (Value Object)
///
/// `math`, `coding` and `general` are known to the router; any other label
/// supplied by the caller is carried verbatim in [`DomainTag::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DomainTag {
    Math,
    Coding,
    #[default]
    General,
    Other(String),
}

impl DomainTag {
    /// Get the string label for this domain
    pub fn as_str(&self) -> &str {
        match self {
            DomainTag::Math => "math",
            DomainTag::Coding => "coding",
            DomainTag::General => "general",
            DomainTag::Other(s) => s,
        }
    }

    /// Whether this is the catch-all `general` label
    pub fn is_general(&self) -> bool {
        matches!(self, DomainTag::General)
    }
}

impl std::fmt::Display for DomainTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DomainTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "math" => DomainTag::Math,
            "coding" => DomainTag::Coding,
            "general" => DomainTag::General,
            other => DomainTag::Other(other.to_string()),
        })
    }
}

impl From<&str> for DomainTag {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl Serialize for DomainTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DomainTag::from(s.as_str()))
    }
}
