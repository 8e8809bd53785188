//! Trained model loading and validation
//!
//! A model directory holds two JSON artifacts written by the training tool:
//! `prior.json`, mapping each category to its prior probability, and
//! `cond_prob.json`, mapping each vocabulary word to its per-category
//! conditional probabilities. The model is loaded once per run, validated,
//! and then shared read-only across every scoring call.

use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{ClassifyError, Result};

pub const PRIOR_ARTIFACT: &str = "prior.json";
pub const COND_PROB_ARTIFACT: &str = "cond_prob.json";

/// Immutable snapshot of the trained parameters.
///
/// The prior table is a `BTreeMap` so that category iteration is always in
/// ascending identifier order; the classifier's tie-break rule depends on
/// this.
#[derive(Debug, Clone)]
pub struct Model {
    prior: BTreeMap<String, f64>,
    cond_prob: HashMap<String, HashMap<String, f64>>,
}

impl Model {
    /// Pair two tables into a model without validating them.
    pub fn new(
        prior: BTreeMap<String, f64>,
        cond_prob: HashMap<String, HashMap<String, f64>>,
    ) -> Self {
        Self { prior, cond_prob }
    }

    /// Load and validate a model from its directory.
    ///
    /// A missing, unreadable, or malformed artifact fails with
    /// [`ClassifyError::ModelLoad`]; tables that deserialize but violate the
    /// model invariants fail with [`ClassifyError::ModelInconsistency`].
    /// Either way no partial model is returned.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let prior = read_artifact(dir, PRIOR_ARTIFACT)?;
        let cond_prob = read_artifact(dir, COND_PROB_ARTIFACT)?;

        let model = Self::new(prior, cond_prob);
        model.validate()?;
        Ok(model)
    }

    /// Check the invariants the classifier relies on: at least one category,
    /// strictly positive finite probabilities, and a conditional entry for
    /// every category under every vocabulary word.
    pub fn validate(&self) -> Result<()> {
        if self.prior.is_empty() {
            return Err(ClassifyError::ModelInconsistency(
                "prior table has no categories".to_string(),
            ));
        }

        for (category, &p) in &self.prior {
            if !(p.is_finite() && p > 0.0) {
                return Err(ClassifyError::ModelInconsistency(format!(
                    "prior for category {} is {}, expected a positive probability",
                    category, p
                )));
            }
        }

        for (word, per_category) in &self.cond_prob {
            for category in self.prior.keys() {
                match per_category.get(category) {
                    None => {
                        return Err(ClassifyError::ModelInconsistency(format!(
                            "word {} has no conditional probability for category {}",
                            word, category
                        )));
                    }
                    Some(&p) if !(p.is_finite() && p > 0.0) => {
                        return Err(ClassifyError::ModelInconsistency(format!(
                            "conditional probability of word {} for category {} is {}",
                            word, category, p
                        )));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }

    /// Categories and their priors, in ascending category order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prior.iter().map(|(category, &p)| (category.as_str(), p))
    }

    /// Per-category conditional probabilities for `word`, if the word was in
    /// the training vocabulary.
    pub fn cond_prob(&self, word: &str) -> Option<&HashMap<String, f64>> {
        self.cond_prob.get(word)
    }

    pub fn category_count(&self) -> usize {
        self.prior.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.cond_prob.len()
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, artifact: &str) -> Result<T> {
    let path = dir.join(artifact);
    let content = std::fs::read_to_string(&path).map_err(|e| ClassifyError::ModelLoad {
        artifact: artifact.to_string(),
        reason: format!("cannot read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&content).map_err(|e| ClassifyError::ModelLoad {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifyError;
    use std::fs;

    fn write_artifacts(dir: &Path, prior: &str, cond_prob: &str) {
        fs::write(dir.join(PRIOR_ARTIFACT), prior).unwrap();
        fs::write(dir.join(COND_PROB_ARTIFACT), cond_prob).unwrap();
    }

    #[test]
    fn test_load_valid_model() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"{"6": 0.25, "10": 0.75}"#,
            r#"{"school": {"6": 0.8, "10": 0.2}, "tax": {"6": 0.1, "10": 0.9}}"#,
        );

        let model = Model::load(dir.path()).unwrap();
        assert_eq!(model.category_count(), 2);
        assert_eq!(model.vocabulary_len(), 2);

        let categories: Vec<&str> = model.categories().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["10", "6"]);

        let school = model.cond_prob("school").unwrap();
        assert_eq!(school["6"], 0.8);
        assert!(model.cond_prob("roads").is_none());
    }

    #[test]
    fn test_missing_prior_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(COND_PROB_ARTIFACT), "{}").unwrap();

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::ModelLoad { ref artifact, .. } if artifact == PRIOR_ARTIFACT
        ));
    }

    #[test]
    fn test_missing_cond_prob_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRIOR_ARTIFACT), r#"{"6": 1.0}"#).unwrap();

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::ModelLoad { ref artifact, .. } if artifact == COND_PROB_ARTIFACT
        ));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), r#"{"6": 0.25"#, "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelLoad { .. }));
    }

    #[test]
    fn test_wrong_shape_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), r#"[0.25, 0.75]"#, "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelLoad { .. }));
    }

    #[test]
    fn test_non_numeric_probability_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), r#"{"6": "likely"}"#, "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelLoad { .. }));
    }

    #[test]
    fn test_empty_prior_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), "{}", "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelInconsistency(_)));
    }

    #[test]
    fn test_zero_prior_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), r#"{"6": 0.0, "10": 1.0}"#, "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelInconsistency(_)));
    }

    #[test]
    fn test_negative_prior_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path(), r#"{"6": -0.5, "10": 1.5}"#, "{}");

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelInconsistency(_)));
    }

    #[test]
    fn test_incomplete_conditional_row_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"{"6": 0.5, "10": 0.5}"#,
            r#"{"school": {"6": 0.8}}"#,
        );

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelInconsistency(_)));
    }

    #[test]
    fn test_zero_conditional_probability_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(
            dir.path(),
            r#"{"6": 0.5, "10": 0.5}"#,
            r#"{"school": {"6": 0.8, "10": 0.0}}"#,
        );

        let err = Model::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ModelInconsistency(_)));
    }
}
