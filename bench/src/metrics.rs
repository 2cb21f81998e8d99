//! Descriptive statistics over a duration series.

use std::fmt;
use std::time::Duration;

use anyhow::{bail, Result};

/// Mean, population variance and population standard deviation of one
/// operation's timings, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSummary {
    pub name: String,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Summarize a series of elapsed times.
pub fn summarize(name: &str, samples: &[Duration]) -> Result<OperationSummary> {
    if samples.is_empty() {
        bail!("no samples recorded for {}", name);
    }

    let secs: Vec<f64> = samples.iter().map(Duration::as_secs_f64).collect();
    let mean = secs.iter().sum::<f64>() / secs.len() as f64;
    let variance = secs.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / secs.len() as f64;

    Ok(OperationSummary {
        name: name.to_string(),
        mean,
        variance,
        std_dev: variance.sqrt(),
    })
}

impl fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} mean={:.1}µs  variance={:.3e}  stddev={:.1}µs",
            self.name,
            self.mean * 1e6,
            self.variance,
            self.std_dev * 1e6,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(values: &[f64]) -> Vec<Duration> {
        values.iter().map(|s| Duration::from_secs_f64(*s)).collect()
    }

    #[test]
    fn summary_of_known_series() {
        let samples = secs(&[1.0, 2.0, 3.0, 4.0]);
        let summary = summarize("insertQuery", &samples).unwrap();
        assert_eq!(summary.name, "insertQuery");
        assert!((summary.mean - 2.5).abs() < 1e-12);
        // Population variance, not the sample estimator.
        assert!((summary.variance - 1.25).abs() < 1e-12);
        assert!((summary.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_sample_has_zero_spread() {
        let summary = summarize("insertProcedure", &secs(&[0.25])).unwrap();
        assert!((summary.mean - 0.25).abs() < 1e-12);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = summarize("insertQuery", &[]).unwrap_err();
        assert!(err.to_string().contains("insertQuery"));
    }

    #[test]
    fn display_names_the_operation() {
        let summary = summarize("insertQuery", &secs(&[0.001, 0.003])).unwrap();
        let shown = summary.to_string();
        assert!(shown.contains("insertQuery"));
        assert!(shown.contains("mean="));
    }
}
