//! Property-test case counts with an environment override.
//!
//! CI runs longer property suites by exporting `GRAPHGEN_PROPTEST_CASES`;
//! local runs fall back to each suite's default.

use std::env;

/// Environment variable overriding property-test case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "GRAPHGEN_PROPTEST_CASES";

/// Returns the number of property cases to run.
///
/// Invalid or zero overrides are logged and ignored.
///
/// # Examples
/// ```
/// use graphgen_test_support::profile::proptest_cases;
///
/// assert!(proptest_cases(32) > 0);
/// ```
#[must_use]
pub fn proptest_cases(default_cases: u32) -> u32 {
    match env::var(PROPTEST_CASES_ENV_KEY) {
        Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                key = PROPTEST_CASES_ENV_KEY,
                value = raw.as_str(),
                reason = reason.as_str(),
                "ignoring invalid property-test override"
            );
            default_cases
        }),
        Err(_) => default_cases,
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let cases = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("not a positive integer: {err}"))?;
    if cases == 0 {
        return Err("case count must be greater than zero".to_owned());
    }
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(" 64 ", Some(64))]
    #[case("1", Some(1))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("many", None)]
    fn parse_cases_accepts_positive_integers(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_cases(raw).ok(), expected);
    }
}
