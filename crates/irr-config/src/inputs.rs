//! Coder export file lists.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The two coders' export files, paired by position.
///
/// `coder1[i]` and `coder2[i]` are two codings of the same batch of references.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputsConfig {
    /// Coder 1 exports. Coder 1's scheme and item list are authoritative.
    #[serde(default)]
    pub coder1: Vec<PathBuf>,

    /// Coder 2 exports, in the same order as `coder1`.
    #[serde(default)]
    pub coder2: Vec<PathBuf>,
}

/// One pair of exports to reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub coder1: PathBuf,
    pub coder2: PathBuf,
}

impl InputsConfig {
    /// Check that both lists are non-empty and of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coder1.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "inputs.coder1".into(),
                reason: "at least one export file is required".into(),
            });
        }
        if self.coder1.len() != self.coder2.len() {
            return Err(ConfigError::InvalidValue {
                field: "inputs.coder2".into(),
                reason: format!(
                    "expected {} export files to pair with inputs.coder1, found {}",
                    self.coder1.len(),
                    self.coder2.len()
                ),
            });
        }
        Ok(())
    }

    /// Export pairs in configuration order.
    #[must_use]
    pub fn pairs(&self) -> Vec<FilePair> {
        self.coder1
            .iter()
            .zip(&self.coder2)
            .map(|(coder1, coder2)| FilePair {
                coder1: coder1.clone(),
                coder2: coder2.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_inputs_are_rejected() {
        let err = InputsConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("inputs.coder1"));
    }

    #[test]
    fn unequal_lists_are_rejected() {
        let inputs = InputsConfig {
            coder1: vec!["a1.json".into(), "b1.json".into()],
            coder2: vec!["a2.json".into()],
        };
        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("expected 2 export files"));
    }

    #[test]
    fn pairs_follow_list_order() {
        let inputs = InputsConfig {
            coder1: vec!["a1.json".into(), "b1.json".into()],
            coder2: vec!["a2.json".into(), "b2.json".into()],
        };
        inputs.validate().expect("valid inputs");
        assert_eq!(
            inputs.pairs(),
            vec![
                FilePair {
                    coder1: "a1.json".into(),
                    coder2: "a2.json".into(),
                },
                FilePair {
                    coder1: "b1.json".into(),
                    coder2: "b2.json".into(),
                },
            ]
        );
    }
}
