use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use serde::Serialize;

use crate::estimation::EstimatesRecord;
use crate::models::{Model, Winner};

pub enum LogFormat {
    Csv,
    Tsv,
    Json,
}

/// One trial's results flattened for the reporting sink.
///
/// Carries both families' estimates and criteria scores, the winners, and
/// the signed and squared errors against the parameters that synthesized
/// the trial's data. `true_model` is present only in randomized-truth
/// experiments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSummary {
    pub iteration: u64,
    pub n: usize,
    pub true_model: Option<Model>,
    pub true_location: f64,
    pub true_scale: f64,

    pub normal_location: f64,
    pub normal_scale_ml: f64,
    pub normal_scale_mml: f64,
    pub normal_log_likelihood: f64,
    pub normal_message_length: f64,

    pub laplace_location: f64,
    pub laplace_scale_ml: f64,
    pub laplace_scale_mml: f64,
    pub laplace_log_likelihood: f64,
    pub laplace_message_length: f64,

    pub winner_likelihood: Winner,
    pub winner_message_length: Winner,

    pub normal_location_error: f64,
    pub normal_scale_ml_error: f64,
    pub normal_scale_mml_error: f64,
    pub laplace_location_error: f64,
    pub laplace_scale_ml_error: f64,
    pub laplace_scale_mml_error: f64,

    /// Laplace length minus Normal length, in bits.
    pub message_length_gap: f64,
}

impl TrialSummary {
    pub fn from_record(
        iteration: u64,
        true_model: Option<Model>,
        true_location: f64,
        true_scale: f64,
        record: &EstimatesRecord,
    ) -> Self {
        Self {
            iteration,
            n: record.n,
            true_model,
            true_location,
            true_scale,
            normal_location: record.normal.estimate.location,
            normal_scale_ml: record.normal.estimate.scale_ml,
            normal_scale_mml: record.normal.estimate.scale_mml,
            normal_log_likelihood: record.normal.log_likelihood,
            normal_message_length: record.normal.message_length,
            laplace_location: record.laplace.estimate.location,
            laplace_scale_ml: record.laplace.estimate.scale_ml,
            laplace_scale_mml: record.laplace.estimate.scale_mml,
            laplace_log_likelihood: record.laplace.log_likelihood,
            laplace_message_length: record.laplace.message_length,
            winner_likelihood: record.winner_likelihood,
            winner_message_length: record.winner_message_length,
            normal_location_error: record.normal.estimate.location - true_location,
            normal_scale_ml_error: record.normal.estimate.scale_ml - true_scale,
            normal_scale_mml_error: record.normal.estimate.scale_mml - true_scale,
            laplace_location_error: record.laplace.estimate.location - true_location,
            laplace_scale_ml_error: record.laplace.estimate.scale_ml - true_scale,
            laplace_scale_mml_error: record.laplace.estimate.scale_mml - true_scale,
            message_length_gap: record.message_length_gap(),
        }
    }
}

/// Append-only log of trial summaries with flat-file export.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TrialLog {
    entries: Vec<TrialSummary>,
}

const COLUMNS: [&str; 24] = [
    "iteration",
    "n",
    "true_model",
    "true_location",
    "true_scale",
    "normal_location",
    "normal_scale_ml",
    "normal_scale_mml",
    "normal_log_likelihood",
    "normal_message_length",
    "laplace_location",
    "laplace_scale_ml",
    "laplace_scale_mml",
    "laplace_log_likelihood",
    "laplace_message_length",
    "winner_likelihood",
    "winner_message_length",
    "normal_location_error",
    "normal_scale_ml_error",
    "normal_scale_mml_error",
    "laplace_location_error",
    "laplace_scale_ml_error",
    "laplace_scale_mml_error",
    "message_length_gap",
];

impl TrialLog {
    pub fn push(&mut self, summary: TrialSummary) {
        self.entries.push(summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&TrialSummary> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[TrialSummary] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: LogFormat) -> Result<(), Error> {
        match fmt {
            LogFormat::Csv => self.export_with_delimiter(path, ','),
            LogFormat::Tsv => self.export_with_delimiter(path, '\t'),
            LogFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        let mut header = String::new();
        for (i, col) in COLUMNS.iter().enumerate() {
            if i > 0 {
                header.push(delimiter);
            }
            header.push_str(col);
        }
        writeln!(w, "{header}")?;
        for s in &self.entries {
            let truth = s
                .true_model
                .map_or_else(|| "-".to_string(), |m| m.to_string());
            let fields: [String; 24] = [
                s.iteration.to_string(),
                s.n.to_string(),
                truth,
                format!("{:.6}", s.true_location),
                format!("{:.6}", s.true_scale),
                format!("{:.6}", s.normal_location),
                format!("{:.6}", s.normal_scale_ml),
                format!("{:.6}", s.normal_scale_mml),
                format!("{:.6}", s.normal_log_likelihood),
                format!("{:.6}", s.normal_message_length),
                format!("{:.6}", s.laplace_location),
                format!("{:.6}", s.laplace_scale_ml),
                format!("{:.6}", s.laplace_scale_mml),
                format!("{:.6}", s.laplace_log_likelihood),
                format!("{:.6}", s.laplace_message_length),
                s.winner_likelihood.to_string(),
                s.winner_message_length.to_string(),
                format!("{:.6}", s.normal_location_error),
                format!("{:.6}", s.normal_scale_ml_error),
                format!("{:.6}", s.normal_scale_mml_error),
                format!("{:.6}", s.laplace_location_error),
                format!("{:.6}", s.laplace_scale_ml_error),
                format!("{:.6}", s.laplace_scale_mml_error),
                format!("{:.6}", s.message_length_gap),
            ];
            writeln!(w, "{}", fields.join(&delimiter.to_string()))?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(w, &self.entries).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::estimate;
    use std::fs;
    use tempfile::NamedTempFile;

    fn summary(iteration: u64) -> TrialSummary {
        let rec = estimate(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.001).unwrap();
        TrialSummary::from_record(iteration, Some(Model::Normal), 0.0, 1.0, &rec)
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let log = TrialLog::default();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn from_record_computes_errors_against_truth() {
        let s = summary(1);
        assert_eq!(s.n, 5);
        assert_eq!(s.normal_location_error, 3.0);
        assert!((s.laplace_scale_ml_error - 0.2).abs() < 1e-12);
        assert!((s.laplace_scale_mml_error - 0.5).abs() < 1e-12);
        assert!(s.message_length_gap > 0.0);
    }

    #[test]
    fn push_and_latest() {
        let mut log = TrialLog::default();
        log.push(summary(1));
        log.push(summary(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().iteration, 2);
    }

    #[test]
    fn tsv_export_has_header_and_one_row_per_trial() {
        let mut log = TrialLog::default();
        log.push(summary(1));
        log.push(summary(2));

        let tf = NamedTempFile::new().unwrap();
        log.export(tf.path(), LogFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let lines: Vec<&str> = got.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("iteration\tn\ttrue_model"));
        assert_eq!(lines[1].split('\t').count(), COLUMNS.len());
        assert!(lines[1].contains("normal"));
    }

    #[test]
    fn csv_export_uses_commas() {
        let mut log = TrialLog::default();
        log.push(summary(1));
        let tf = NamedTempFile::new().unwrap();
        log.export(tf.path(), LogFormat::Csv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert!(got.lines().next().unwrap().contains("iteration,n,true_model"));
    }

    #[test]
    fn json_export_parses_back() {
        let mut log = TrialLog::default();
        log.push(summary(1));
        let tf = NamedTempFile::new().unwrap();
        log.export(tf.path(), LogFormat::Json).unwrap();
        let text = fs::read_to_string(tf.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["true_model"], "normal");
        assert_eq!(rows[0]["winner_message_length"], "normal");
        assert_eq!(rows[0]["n"], 5);
    }
}
