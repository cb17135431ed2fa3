// src/types.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How strictly a curriculum definition is checked when it is loaded.
///
/// - `Lenient`: prerequisites that never appear as a course of their own are
///   accepted as implicit courses with no prerequisites (default).
/// - `Strict`: every prerequisite must be declared, no course may list itself,
///   and cycles are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Lenient,
    Strict,
}

impl Default for ValidationMode {
    fn default() -> Self {
        ValidationMode::Lenient
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(format!(
                "invalid validation mode: {other} (expected \"lenient\" or \"strict\")"
            )),
        }
    }
}

/// What to do with a curriculum whose prerequisite graph contains a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Accept the curriculum; queries that hit the cycle report zero stages
    /// and flag the residual as cyclic (default).
    Degrade,
    /// Refuse to load the curriculum.
    Reject,
}

impl Default for CyclePolicy {
    fn default() -> Self {
        CyclePolicy::Degrade
    }
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrade" => Ok(CyclePolicy::Degrade),
            "reject" => Ok(CyclePolicy::Reject),
            other => Err(format!(
                "invalid cycle_policy: {other} (expected \"degrade\" or \"reject\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!("Strict".parse::<ValidationMode>(), Ok(ValidationMode::Strict));
        assert_eq!(" lenient ".parse::<ValidationMode>(), Ok(ValidationMode::Lenient));
        assert_eq!("REJECT".parse::<CyclePolicy>(), Ok(CyclePolicy::Reject));
        assert!("sometimes".parse::<CyclePolicy>().is_err());
    }

    #[test]
    fn defaults_are_lenient_and_degrading() {
        assert_eq!(ValidationMode::default(), ValidationMode::Lenient);
        assert_eq!(CyclePolicy::default(), CyclePolicy::Degrade);
    }
}
