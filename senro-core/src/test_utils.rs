//! Shared test utilities for `senro-core`.

use proptest::test_runner::Config as ProptestConfig;
use senro_test_support::proptest_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps property suites aligned on the same `SENRO_PBT_CASES` and
/// `SENRO_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
