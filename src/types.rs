use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a credit application
pub type ApplicationId = Uuid;

/// credit application lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditStatus {
    /// submitted, awaiting a decision
    Pending,
    /// approved by the back office, not yet disbursed
    Approved,
    /// declined, terminal
    Rejected,
    /// funds disbursed, loan running
    Active,
    /// fully repaid, terminal
    Closed,
}

impl CreditStatus {
    /// statuses reachable in a single step; the graph is forward-only
    pub fn successors(self) -> &'static [CreditStatus] {
        match self {
            CreditStatus::Pending => &[CreditStatus::Approved, CreditStatus::Rejected],
            CreditStatus::Approved => &[CreditStatus::Active],
            CreditStatus::Active => &[CreditStatus::Closed],
            CreditStatus::Rejected | CreditStatus::Closed => &[],
        }
    }

    /// check whether a single-step transition is permitted
    pub fn can_transition_to(self, next: CreditStatus) -> bool {
        self.successors().contains(&next)
    }

    /// no further transitions are possible
    pub fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CreditStatus::Pending => "pending",
            CreditStatus::Approved => "approved",
            CreditStatus::Rejected => "rejected",
            CreditStatus::Active => "active",
            CreditStatus::Closed => "closed",
        };
        f.write_str(s)
    }
}
