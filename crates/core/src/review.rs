//! Review session origin types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a review session was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginType {
    Deck,
    Playlist,
}

impl OriginType {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginType::Deck => "deck",
            OriginType::Playlist => "playlist",
        }
    }
}

impl fmt::Display for OriginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored origin type is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("Unknown review origin type '{0}'")]
pub struct UnknownOriginType(pub String);

impl FromStr for OriginType {
    type Err = UnknownOriginType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deck" => Ok(OriginType::Deck),
            "playlist" => Ok(OriginType::Playlist),
            other => Err(UnknownOriginType(other.to_string())),
        }
    }
}

impl TryFrom<String> for OriginType {
    type Error = UnknownOriginType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_names() {
        assert_eq!("deck".parse::<OriginType>().unwrap(), OriginType::Deck);
        assert_eq!(
            "playlist".parse::<OriginType>().unwrap(),
            OriginType::Playlist
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "album".parse::<OriginType>().unwrap_err();
        assert!(err.to_string().contains("album"));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&OriginType::Playlist).unwrap();
        assert_eq!(json, "\"playlist\"");
    }
}
