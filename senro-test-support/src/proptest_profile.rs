//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts or enable forking for every property suite in
//! the workspace without touching the suites themselves.

use std::env;

/// Environment variable controlling proptest case counts.
pub const SENRO_PBT_CASES_ENV_KEY: &str = "SENRO_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const SENRO_PBT_FORK_ENV_KEY: &str = "SENRO_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the provided
    /// defaults when a variable is unset or invalid.
    ///
    /// # Examples
    /// ```
    /// use senro_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or_default(SENRO_PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: read_env_or_default(SENRO_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn read_env_or_default<T: Copy>(
    key: &'static str,
    default: T,
    parser: impl Fn(&str) -> Result<T, String>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case(" 256 ", 256)]
    fn parse_cases_accepts_positive_counts(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_cases(raw), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn parse_cases_rejects_invalid_counts(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }

    #[rstest]
    #[case("TRUE", true)]
    #[case("on", true)]
    #[case(" 0 ", false)]
    #[case("no", false)]
    fn parse_bool_accepts_known_spellings(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(raw), Ok(expected));
    }

    #[test]
    fn parse_bool_rejects_unknown_spellings() {
        assert!(parse_bool("maybe").is_err());
    }
}
