use crate::core::events::EnemyId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitDecision {
    Hit,
    Miss,
}

impl HitDecision {
    pub fn is_hit(self) -> bool {
        matches!(self, HitDecision::Hit)
    }
}

/// Outcome for one defender caught in an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResult {
    pub target: EnemyId,
    pub decision: HitDecision,
    /// Zero on a miss.
    pub damage: u64,
}

/// Everything one strike did.
///
/// `NoTargets` and a `Resolved` report with only misses have the same
/// effect on the world but are kept apart for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackReport {
    NoTargets,
    Resolved(Vec<TargetResult>),
}

impl AttackReport {
    pub fn targets(&self) -> &[TargetResult] {
        match self {
            AttackReport::NoTargets => &[],
            AttackReport::Resolved(results) => results,
        }
    }

    pub fn hits(&self) -> impl Iterator<Item = &TargetResult> {
        self.targets().iter().filter(|r| r.decision.is_hit())
    }

    pub fn hit_count(&self) -> usize {
        self.hits().count()
    }

    pub fn any_hit(&self) -> bool {
        self.hits().next().is_some()
    }

    pub fn total_damage(&self) -> u64 {
        self.hits().map(|r| r.damage).sum()
    }
}
