//! Accuracy measurement against labeled examples
//!
//! [`evaluate`] scores one model; [`sweep`] scores every order of a
//! [`ModelSet`] on the same examples and picks the best one.

use crate::classifier::{Model, ModelSet};
use crate::corpus::{LabeledLine, LabeledSet};
use crate::models::Language;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Predicted label recorded for examples without any known n-gram
pub const UNDECIDABLE_LABEL: &str = "undecidable";

/// Accuracy on the examples of one true language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageAccuracy {
    pub language: Language,
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Result of scoring one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub order: usize,
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub undecidable: usize,
    /// (wrong + undecidable) / total
    pub error_rate: f64,
    /// One row per model language, in configured order
    pub per_language: Vec<LanguageAccuracy>,
    /// True labels that are not candidates of the model
    pub unknown_labels: Vec<Language>,
    /// true label → predicted label → count
    pub confusion: BTreeMap<String, BTreeMap<String, usize>>,
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

pub fn evaluate(model: &Model, examples: &[LabeledLine]) -> Evaluation {
    evaluate_observed(model, examples, || {})
}

/// Like [`evaluate`], calling `on_classified` once per example as it
/// completes (from worker threads).
pub fn evaluate_observed<F>(model: &Model, examples: &[LabeledLine], on_classified: F) -> Evaluation
where
    F: Fn() + Sync,
{
    let predictions: Vec<Option<Language>> = examples
        .par_iter()
        .map(|example| {
            let prediction = model.classify(&example.text).ok();
            on_classified();
            prediction
        })
        .collect();

    let mut correct = 0;
    let mut wrong = 0;
    let mut undecidable = 0;
    let mut confusion: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut unknown_labels: Vec<Language> = Vec::new();
    let mut per_language: Vec<LanguageAccuracy> = model
        .languages()
        .map(|language| LanguageAccuracy {
            language: language.clone(),
            total: 0,
            correct: 0,
            accuracy: 0.0,
        })
        .collect();

    for (example, prediction) in examples.iter().zip(&predictions) {
        let row = per_language
            .iter_mut()
            .find(|row| row.language == example.label);
        if !model.contains(&example.label) && !unknown_labels.contains(&example.label) {
            unknown_labels.push(example.label.clone());
        }

        let hit = prediction.as_ref() == Some(&example.label);
        match prediction {
            Some(_) if hit => correct += 1,
            Some(_) => wrong += 1,
            None => undecidable += 1,
        }
        if let Some(row) = row {
            row.total += 1;
            if hit {
                row.correct += 1;
            }
        }

        let predicted = prediction
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_else(|| UNDECIDABLE_LABEL.to_string());
        *confusion
            .entry(example.label.to_string())
            .or_default()
            .entry(predicted)
            .or_insert(0) += 1;
    }

    for row in &mut per_language {
        row.accuracy = ratio(row.correct, row.total);
    }

    let total = examples.len();
    tracing::debug!(
        "n={}: {}/{} correct, {} undecidable",
        model.order(),
        correct,
        total,
        undecidable
    );

    Evaluation {
        order: model.order(),
        total,
        correct,
        wrong,
        undecidable,
        error_rate: ratio(wrong + undecidable, total),
        per_language,
        unknown_labels,
        confusion,
    }
}

/// Evaluations of one or more orders on a shared evaluation set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub examples: usize,
    pub malformed_lines: usize,
    /// Ascending by order
    pub evaluations: Vec<Evaluation>,
    /// Lowest error rate; ties go to the smaller order
    pub best_order: Option<usize>,
}

impl SweepReport {
    pub fn new(set: &LabeledSet, mut evaluations: Vec<Evaluation>) -> Self {
        evaluations.sort_by_key(|e| e.order);
        let mut best: Option<&Evaluation> = None;
        for evaluation in &evaluations {
            match best {
                Some(b) if evaluation.error_rate >= b.error_rate => {}
                _ => best = Some(evaluation),
            }
        }
        let best_order = best.map(|e| e.order);

        Self {
            examples: set.len(),
            malformed_lines: set.malformed.len(),
            evaluations,
            best_order,
        }
    }

    pub fn best(&self) -> Option<&Evaluation> {
        let order = self.best_order?;
        self.evaluations.iter().find(|e| e.order == order)
    }
}

/// Evaluate every model of `models` on `set`
pub fn sweep<F>(models: &ModelSet, set: &LabeledSet, on_classified: F) -> SweepReport
where
    F: Fn() + Sync,
{
    let evaluations = models
        .models()
        .iter()
        .map(|model| evaluate_observed(model, &set.examples, &on_classified))
        .collect();
    SweepReport::new(set, evaluations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_labeled;

    fn corpora() -> Vec<(Language, &'static str)> {
        vec![
            (Language::new("aa"), "abc cab bca abc"),
            (Language::new("bb"), "xyz zyx yzx xyz"),
        ]
    }

    #[test]
    fn test_evaluate_counts() {
        let model = Model::build(2, &corpora()).unwrap();
        let set = parse_labeled("aa\tcab\nbb\tzyx\naa\txyz\nbb\tqqq\n");
        let eval = evaluate(&model, &set.examples);

        assert_eq!(eval.total, 4);
        assert_eq!(eval.correct, 2);
        assert_eq!(eval.wrong, 1);
        assert_eq!(eval.undecidable, 1);
        assert!((eval.error_rate - 0.5).abs() < 1e-12);

        assert_eq!(eval.per_language[0].language, Language::new("aa"));
        assert_eq!(eval.per_language[0].total, 2);
        assert_eq!(eval.per_language[0].correct, 1);
        assert_eq!(eval.confusion["aa"]["bb"], 1);
        assert_eq!(eval.confusion["bb"][UNDECIDABLE_LABEL], 1);
    }

    #[test]
    fn test_unknown_labels_count_as_errors() {
        let model = Model::build(2, &corpora()).unwrap();
        let set = parse_labeled("zz\tcab\nzz\tzyx\n");
        let eval = evaluate(&model, &set.examples);
        assert_eq!(eval.unknown_labels, vec![Language::new("zz")]);
        assert_eq!(eval.wrong, 2);
        assert!(eval.per_language.iter().all(|row| row.total == 0));
    }

    #[test]
    fn test_empty_set() {
        let model = Model::build(2, &corpora()).unwrap();
        let eval = evaluate(&model, &[]);
        assert_eq!(eval.total, 0);
        assert_eq!(eval.error_rate, 0.0);
    }

    #[test]
    fn test_observer_sees_every_example() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let model = Model::build(2, &corpora()).unwrap();
        let set = parse_labeled("aa\tcab\nbb\tzyx\naa\tbca\n");
        let seen = AtomicUsize::new(0);
        evaluate_observed(&model, &set.examples, || {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(seen.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_sweep_picks_lowest_error_then_smallest_order() {
        let models = ModelSet::build(&[1, 2, 3], &corpora()).unwrap();
        let set = parse_labeled("aa\tabc\nbb\txyz\nbroken line\n");
        let report = sweep(&models, &set, || {});

        assert_eq!(report.examples, 2);
        assert_eq!(report.malformed_lines, 1);
        assert_eq!(report.evaluations.len(), 3);
        // every order separates disjoint alphabets perfectly
        assert_eq!(report.best_order, Some(1));
        assert_eq!(report.best().map(|e| e.error_rate), Some(0.0));
    }

    #[test]
    fn test_report_prefers_lower_error() {
        let set = LabeledSet::default();
        let eval = |order: usize, error_rate: f64| Evaluation {
            order,
            total: 10,
            correct: 0,
            wrong: 0,
            undecidable: 0,
            error_rate,
            per_language: Vec::new(),
            unknown_labels: Vec::new(),
            confusion: BTreeMap::new(),
        };
        let report = SweepReport::new(&set, vec![eval(3, 0.1), eval(1, 0.4), eval(2, 0.1)]);
        assert_eq!(report.best_order, Some(2));
        assert_eq!(
            report.evaluations.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
