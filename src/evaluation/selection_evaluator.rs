use std::f64::consts::LN_2;

use strum::IntoEnumIterator;

use crate::estimation::EstimatesRecord;
use crate::evaluation::{Measurement, StreamingMean};
use crate::models::{Model, Winner};
use crate::utils::math;

#[inline]
fn idx(model: Model) -> usize {
    match model {
        Model::Normal => 0,
        Model::Laplace => 1,
    }
}

/// Confusion counts plus posterior scoring for one selection criterion.
#[derive(Debug, Default, Clone)]
struct CriterionTally {
    /// `counts[truth][predicted]`, indexed Normal = 0, Laplace = 1.
    counts: [[u64; 2]; 2],
    /// Draws per true model; a draw predicts neither family.
    draws: [u64; 2],
    posterior_score: StreamingMean,
}

impl CriterionTally {
    fn record(&mut self, truth: Model, winner: Winner, score: f64) {
        match winner.model() {
            Some(predicted) => self.counts[idx(truth)][idx(predicted)] += 1,
            None => self.draws[idx(truth)] += 1,
        }
        self.posterior_score.add(score);
    }

    fn total(&self) -> u64 {
        self.counts.iter().flatten().sum::<u64>() + self.draws.iter().sum::<u64>()
    }

    fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return f64::NAN;
        }
        let correct = self.counts[0][0] + self.counts[1][1];
        correct as f64 / total as f64
    }

    /// Fraction of `model` predictions that were right. Draws predict
    /// nothing, so they do not enter the denominator.
    fn precision(&self, model: Model) -> f64 {
        let m = idx(model);
        let predicted = self.counts[0][m] + self.counts[1][m];
        if predicted == 0 {
            return f64::NAN;
        }
        self.counts[m][m] as f64 / predicted as f64
    }

    /// Fraction of trials truly generated by `model` that were recovered.
    /// Draws on such trials count against recall.
    fn recall(&self, model: Model) -> f64 {
        let m = idx(model);
        let actual = self.counts[m][0] + self.counts[m][1] + self.draws[m];
        if actual == 0 {
            return f64::NAN;
        }
        self.counts[m][m] as f64 / actual as f64
    }

    fn f_measure(&self, model: Model) -> f64 {
        let p = self.precision(model);
        let r = self.recall(model);
        let s = p + r;
        if p.is_finite() && r.is_finite() && s > f64::EPSILON {
            2.0 * p * r / s
        } else {
            f64::NAN
        }
    }
}

/// Evaluator for experiments where the true generating family is known.
///
/// Both criteria are tallied independently: a trial can be recovered by
/// message length and missed by likelihood, and that disagreement is part
/// of the result. Alongside the confusion counts, each trial contributes a
/// code-length score `-log2 p(truth)` where `p` is the logistic posterior
/// of the true model under the criterion; lower mean scores mean better
/// calibrated selection.
#[derive(Debug, Default, Clone)]
pub struct SelectionEvaluator {
    likelihood: CriterionTally,
    message_length: CriterionTally,
    trials: u64,
    failed_trials: u64,
}

impl SelectionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one completed trial whose true generating family is `truth`.
    pub fn add_trial(&mut self, truth: Model, record: &EstimatesRecord) {
        self.trials += 1;
        self.likelihood.record(
            truth,
            record.winner_likelihood,
            Self::likelihood_score(record, truth),
        );
        self.message_length.record(
            truth,
            record.winner_message_length,
            Self::message_score(record, truth),
        );
    }

    /// Counts a trial whose estimation failed.
    pub fn record_failure(&mut self) {
        self.trials += 1;
        self.failed_trials += 1;
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn failed_trials(&self) -> u64 {
        self.failed_trials
    }

    /// Posterior probability of `model` implied by the two message lengths,
    /// `1 / (1 + exp(delta))` with `delta` the length gap in nats.
    pub fn message_posterior(record: &EstimatesRecord, model: Model) -> f64 {
        math::logistic(Self::message_delta_nats(record, model))
    }

    /// Posterior probability of `model` implied by the two log-likelihoods.
    pub fn likelihood_posterior(record: &EstimatesRecord, model: Model) -> f64 {
        math::logistic(Self::likelihood_delta(record, model))
    }

    fn message_delta_nats(record: &EstimatesRecord, model: Model) -> f64 {
        let gap_bits = match model {
            Model::Normal => record.normal.message_length - record.laplace.message_length,
            Model::Laplace => record.laplace.message_length - record.normal.message_length,
        };
        gap_bits * LN_2
    }

    fn likelihood_delta(record: &EstimatesRecord, model: Model) -> f64 {
        match model {
            Model::Normal => record.laplace.log_likelihood - record.normal.log_likelihood,
            Model::Laplace => record.normal.log_likelihood - record.laplace.log_likelihood,
        }
    }

    /// `-log2 p(truth)` in a form that stays finite when `p` underflows.
    fn message_score(record: &EstimatesRecord, truth: Model) -> f64 {
        math::softplus(Self::message_delta_nats(record, truth)) / LN_2
    }

    fn likelihood_score(record: &EstimatesRecord, truth: Model) -> f64 {
        math::softplus(Self::likelihood_delta(record, truth)) / LN_2
    }

    /// Snapshot of current metrics, per criterion and per family.
    pub fn performance(&self) -> Vec<Measurement> {
        let mut m = Vec::new();
        for (prefix, tally) in [
            ("likelihood", &self.likelihood),
            ("message_length", &self.message_length),
        ] {
            m.push(Measurement::new(
                format!("{prefix}_accuracy"),
                tally.accuracy(),
            ));
            for model in Model::iter() {
                m.push(Measurement::new(
                    format!("{prefix}_precision_{model}"),
                    tally.precision(model),
                ));
                m.push(Measurement::new(
                    format!("{prefix}_recall_{model}"),
                    tally.recall(model),
                ));
                m.push(Measurement::new(
                    format!("{prefix}_f1_{model}"),
                    tally.f_measure(model),
                ));
            }
            m.push(Measurement::new(
                format!("{prefix}_posterior_score"),
                tally.posterior_score.mean(),
            ));
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::estimate;

    fn normal_favoring() -> EstimatesRecord {
        estimate(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.001).unwrap()
    }

    fn laplace_favoring() -> EstimatesRecord {
        let values = [
            -9.0, -0.4, -0.3, -0.2, -0.1, -0.05, 0.05, 0.1, 0.2, 0.3, 0.4, 9.0,
        ];
        estimate(&values, 0.001).unwrap()
    }

    fn get(perf: &[Measurement], name: &str) -> f64 {
        perf.iter().find(|m| m.name == name).unwrap().value
    }

    #[test]
    fn empty_evaluator_reports_nan_metrics() {
        let ev = SelectionEvaluator::new();
        let perf = ev.performance();
        assert!(get(&perf, "likelihood_accuracy").is_nan());
        assert!(get(&perf, "message_length_precision_normal").is_nan());
        assert_eq!(ev.trials(), 0);
    }

    #[test]
    fn perfect_recovery_scores_one_everywhere() {
        let mut ev = SelectionEvaluator::new();
        ev.add_trial(Model::Normal, &normal_favoring());
        ev.add_trial(Model::Laplace, &laplace_favoring());

        let perf = ev.performance();
        for name in [
            "likelihood_accuracy",
            "message_length_accuracy",
            "message_length_precision_normal",
            "message_length_recall_normal",
            "message_length_f1_normal",
            "message_length_precision_laplace",
            "message_length_recall_laplace",
            "message_length_f1_laplace",
        ] {
            assert!((get(&perf, name) - 1.0).abs() < 1e-12, "{name}");
        }
    }

    #[test]
    fn misclassification_shows_up_in_precision_and_recall() {
        let mut ev = SelectionEvaluator::new();
        // Both trials truly Laplace, one recovered and one missed.
        ev.add_trial(Model::Laplace, &laplace_favoring());
        ev.add_trial(Model::Laplace, &normal_favoring());

        let perf = ev.performance();
        assert!((get(&perf, "message_length_accuracy") - 0.5).abs() < 1e-12);
        assert!((get(&perf, "message_length_recall_laplace") - 0.5).abs() < 1e-12);
        // Every laplace prediction was right, every normal prediction wrong.
        assert!((get(&perf, "message_length_precision_laplace") - 1.0).abs() < 1e-12);
        assert!((get(&perf, "message_length_precision_normal") - 0.0).abs() < 1e-12);
        // No truly-normal trials were seen.
        assert!(get(&perf, "message_length_recall_normal").is_nan());
    }

    #[test]
    fn posteriors_of_the_two_models_sum_to_one() {
        let rec = normal_favoring();
        let pn = SelectionEvaluator::message_posterior(&rec, Model::Normal);
        let pl = SelectionEvaluator::message_posterior(&rec, Model::Laplace);
        assert!((pn + pl - 1.0).abs() < 1e-12);
        assert!(pn > 0.5, "shorter message must be the likelier model");

        let qn = SelectionEvaluator::likelihood_posterior(&rec, Model::Normal);
        let ql = SelectionEvaluator::likelihood_posterior(&rec, Model::Laplace);
        assert!((qn + ql - 1.0).abs() < 1e-12);
        assert!(qn > 0.5);
    }

    #[test]
    fn posterior_score_penalizes_wrong_truths() {
        let rec = normal_favoring();
        let right = SelectionEvaluator::message_score(&rec, Model::Normal);
        let wrong = SelectionEvaluator::message_score(&rec, Model::Laplace);
        assert!(right < wrong);
        assert!(right > 0.0);
        // Scores are code lengths: -log2 of the posterior.
        let p = SelectionEvaluator::message_posterior(&rec, Model::Normal);
        assert!((right - (-p.log2())).abs() < 1e-9);
    }

    #[test]
    fn failures_count_trials_but_not_metrics() {
        let mut ev = SelectionEvaluator::new();
        ev.record_failure();
        ev.add_trial(Model::Normal, &normal_favoring());
        assert_eq!(ev.trials(), 2);
        assert_eq!(ev.failed_trials(), 1);
        let perf = ev.performance();
        assert!((get(&perf, "message_length_accuracy") - 1.0).abs() < 1e-12);
    }
}
