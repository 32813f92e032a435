use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The output of a signal generator: one floating-point score per asset.
pub type SignalMap = HashMap<String, f64>;

/// An ordered set of asset identifiers.
///
/// Order is significant, it becomes the row order of every signal table built
/// over this universe. Identifiers are unique and non-empty; both properties
/// are checked on construction and on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Universe {
    assets: Vec<String>,
}

impl Universe {
    /// Builds a universe, rejecting duplicate or empty identifiers.
    pub fn new<I, S>(assets: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let assets: Vec<String> = assets.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(assets.len());

        for asset in &assets {
            if asset.trim().is_empty() {
                return Err(CoreError::EmptyIdentifier);
            }
            if !seen.insert(asset.as_str()) {
                return Err(CoreError::DuplicateAsset(asset.clone()));
            }
        }

        Ok(Self { assets })
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.assets.iter().any(|a| a == asset)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.assets.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.assets
    }
}

impl TryFrom<Vec<String>> for Universe {
    type Error = CoreError;

    fn try_from(assets: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(assets)
    }
}

impl From<Universe> for Vec<String> {
    fn from(universe: Universe) -> Self {
        universe.assets
    }
}

impl AsRef<[String]> for Universe {
    fn as_ref(&self) -> &[String] {
        &self.assets
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let universe = Universe::new(["MSFT", "AAPL", "GOOGL"]).unwrap();
        assert_eq!(universe.as_slice(), ["MSFT", "AAPL", "GOOGL"]);
        assert_eq!(universe.len(), 3);
        assert!(universe.contains("AAPL"));
        assert!(!universe.contains("TSLA"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Universe::new(["AAPL", "GOOGL", "AAPL"]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateAsset("AAPL".to_string()));
    }

    #[test]
    fn test_rejects_blank_identifier() {
        let err = Universe::new(["AAPL", "  "]).unwrap_err();
        assert_eq!(err, CoreError::EmptyIdentifier);
    }

    #[test]
    fn test_empty_universe_is_constructible() {
        let universe = Universe::new(Vec::<String>::new()).unwrap();
        assert!(universe.is_empty());
        assert_eq!(universe, Universe::default());
    }

    #[test]
    fn test_deserialize_validates() {
        let universe: Universe = serde_json::from_str(r#"["AAPL","GOOGL"]"#).unwrap();
        assert_eq!(universe.len(), 2);

        let duplicate = serde_json::from_str::<Universe>(r#"["AAPL","AAPL"]"#);
        assert!(duplicate.is_err());
    }
}
