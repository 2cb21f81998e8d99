//! Pre-run checks against the target server.
//!
//! A full run spends thousands of round trips; a broken target should be
//! caught with one.

use std::time::Instant;

use poly_link::PolyClient;

/// Result of a single pre-flight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: detail.into(),
        }
    }

    pub fn display(&self) -> String {
        let icon = if self.passed { "✅" } else { "❌" };
        format!("{} {:<16} {}", icon, self.name, self.detail)
    }
}

/// Run the pre-flight checks over an open connection.
pub async fn run_checks(client: &PolyClient) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let started = Instant::now();
    match client.fetch_one("SELECT 1").await {
        Ok(_) => {
            let elapsed = started.elapsed();
            results.push(CheckResult::pass("probe query", "server answers SQL"));
            results.push(CheckResult::pass(
                "round trip",
                format!("{:.1}ms", elapsed.as_secs_f64() * 1000.0),
            ));
        }
        Err(e) => {
            results.push(CheckResult::fail("probe query", e.to_string()));
        }
    }

    results
}

pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_pass_and_fail() {
        let pass = CheckResult::pass("probe query", "ok");
        let fail = CheckResult::fail("probe query", "refused");
        assert!(pass.display().contains("✅"));
        assert!(fail.display().contains("❌"));
        assert!(fail.display().contains("refused"));
    }

    #[test]
    fn all_passed_requires_every_check() {
        let results = vec![
            CheckResult::pass("a", ""),
            CheckResult::fail("b", "nope"),
        ];
        assert!(!all_passed(&results));
        assert!(all_passed(&results[..1]));
    }
}
