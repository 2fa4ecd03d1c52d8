//! Configuration for the preimage engine.

use serde::{Deserialize, Serialize};

/// How the engine picks the line reported by `separating_line`.
///
/// Feasibility never depends on this choice, only which member of the
/// preimage is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePolicy {
    /// Keep the current line for as long as new pairs satisfy it; search a
    /// new one only when it is violated.
    #[default]
    KeepWhileValid,
    /// Re-run the canonical search after every successful extension, so the
    /// reported line depends only on the set of pairs absorbed, not on the
    /// order they arrived in.
    Recompute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreimageConfig {
    pub line_policy: LinePolicy,
    /// Run the consistency audit after each successful extension and log
    /// any finding.
    pub audit_on_update: bool,
}

impl Default for PreimageConfig {
    fn default() -> Self {
        Self {
            line_policy: LinePolicy::KeepWhileValid,
            audit_on_update: false,
        }
    }
}

impl PreimageConfig {
    /// Order-independent reported line.
    pub fn canonical() -> Self {
        Self {
            line_policy: LinePolicy::Recompute,
            ..Self::default()
        }
    }

    /// Audit after every update; meant for tests and debugging.
    pub fn strict() -> Self {
        Self {
            audit_on_update: true,
            ..Self::default()
        }
    }
}
