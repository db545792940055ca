use serde::{Deserialize, Serialize};

/// Kinds of multi-body chart configurations.
///
/// `GrandCross`, `Yod` and `Kite` are reserved tags: stored chart records
/// and downstream consumers accept them, but the detector does not produce
/// them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationKind {
    GrandTrine,
    TSquare,
    Stellium,
    GrandCross,
    Yod,
    Kite,
}

/// A detected multi-body geometric pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfiguration {
    pub kind: ConfigurationKind,
    /// Participating body ids; for a T-square the apex is listed last
    pub bodies: Vec<String>,
    pub description: String,
}

/// Orb tolerances for pattern detection. Independent of the aspect
/// detector's profiles and tighter than the natal orbs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternOrbs {
    pub trine: f64,
    pub opposition: f64,
    pub square: f64,
}

impl Default for PatternOrbs {
    fn default() -> Self {
        Self {
            trine: 6.0,
            opposition: 6.0,
            square: 5.0,
        }
    }
}
