use serde::{Deserialize, Serialize};

/// Auto-assignment algorithm used by tags, correspondents, document types,
/// storage paths and workflow triggers.
///
/// Serialized as the integer code the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MatchingAlgorithm {
    #[default]
    None = 0,
    Any = 1,
    All = 2,
    Literal = 3,
    Regex = 4,
    Fuzzy = 5,
    Auto = 6,
}

impl From<MatchingAlgorithm> for u8 {
    fn from(algorithm: MatchingAlgorithm) -> Self {
        algorithm as u8
    }
}

impl TryFrom<u8> for MatchingAlgorithm {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Any),
            2 => Ok(Self::All),
            3 => Ok(Self::Literal),
            4 => Ok(Self::Regex),
            5 => Ok(Self::Fuzzy),
            6 => Ok(Self::Auto),
            other => Err(format!("unknown matching algorithm {}", other)),
        }
    }
}
