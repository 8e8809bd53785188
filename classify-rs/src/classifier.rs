//! Naive Bayes document scoring
//!
//! Scores are computed in log space: the log prior of each category plus,
//! for every word the model knows, the word's document count times the log
//! of its conditional probability. Words outside the training vocabulary
//! contribute nothing, so a document with no known words falls back to the
//! category priors alone.

use text_util::WordCounter;

use crate::error::{ClassifyError, Result};
use crate::model::Model;

/// Pick the best category for a counted document.
///
/// Categories are compared in ascending identifier order and a candidate
/// only replaces the current best on a strictly greater score, so exact
/// ties resolve to the smallest category identifier.
pub fn classify<'m>(counter: &WordCounter, model: &'m Model) -> Result<&'m str> {
    let mut best: Option<(&str, f64)> = None;

    for (category, prior) in model.categories() {
        let score = score_category(counter, model, category, prior)?;
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((category, score)),
        }
    }

    match best {
        Some((category, _)) => Ok(category),
        None => Err(ClassifyError::ModelInconsistency(
            "prior table has no categories".to_string(),
        )),
    }
}

/// Log-space score of one category for one document.
fn score_category(
    counter: &WordCounter,
    model: &Model,
    category: &str,
    prior: f64,
) -> Result<f64> {
    if !(prior.is_finite() && prior > 0.0) {
        return Err(ClassifyError::ModelInconsistency(format!(
            "prior for category {} is {}, expected a positive probability",
            category, prior
        )));
    }

    let mut score = prior.ln();

    for word in counter.words() {
        // Words outside the vocabulary carry no evidence
        let per_category = match model.cond_prob(word) {
            Some(per_category) => per_category,
            None => continue,
        };

        let p = per_category.get(category).copied().ok_or_else(|| {
            ClassifyError::ModelInconsistency(format!(
                "word {} has no conditional probability for category {}",
                word, category
            ))
        })?;
        if !(p.is_finite() && p > 0.0) {
            return Err(ClassifyError::ModelInconsistency(format!(
                "conditional probability of word {} for category {} is {}",
                word, category, p
            )));
        }

        score += f64::from(counter.count(word)) * p.ln();
    }

    Ok(score)
}
