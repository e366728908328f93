//! Static marketing content: tokenomics and roadmap.

use serde::Serialize;

/// Total VVT supply across every farm.
pub const TOTAL_SUPPLY: u64 = 1_000_000;

/// One slice of the token supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    pub label: &'static str,
    pub percent: u32,
    pub note: &'static str,
}

impl Allocation {
    /// Number of tokens this slice represents.
    pub fn tokens(&self) -> u64 {
        TOTAL_SUPPLY * self.percent as u64 / 100
    }
}

pub static TOKENOMICS: [Allocation; 5] = [
    Allocation {
        label: "Public sale",
        percent: 60,
        note: "Sold to investors, one token per plant share",
    },
    Allocation {
        label: "Farm operations",
        percent: 15,
        note: "Planting, curing and care during the pre-harvest years",
    },
    Allocation {
        label: "Grower cooperatives",
        percent: 10,
        note: "Allocated to partner cooperatives in the SAVA region",
    },
    Allocation {
        label: "Team",
        percent: 10,
        note: "Vested over four years",
    },
    Allocation {
        label: "Reserve",
        percent: 5,
        note: "Liquidity and contingencies",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneStatus {
    Done,
    InProgress,
    Planned,
}

impl std::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatus::Done => write!(f, "Done"),
            MilestoneStatus::InProgress => write!(f, "In progress"),
            MilestoneStatus::Planned => write!(f, "Planned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Milestone {
    pub phase: u32,
    pub period: &'static str,
    pub title: &'static str,
    pub status: MilestoneStatus,
}

pub static ROADMAP: [Milestone; 5] = [
    Milestone {
        phase: 1,
        period: "Q1 2024",
        title: "Land acquisition and first nursery",
        status: MilestoneStatus::Done,
    },
    Milestone {
        phase: 2,
        period: "Q3 2024",
        title: "Token launch and public sale",
        status: MilestoneStatus::Done,
    },
    Milestone {
        phase: 3,
        period: "Q2 2025",
        title: "Second farm planted, investor dashboard",
        status: MilestoneStatus::InProgress,
    },
    Milestone {
        phase: 4,
        period: "2027",
        title: "First harvest and curing facility",
        status: MilestoneStatus::Planned,
    },
    Milestone {
        phase: 5,
        period: "2028",
        title: "Harvest income distribution to holders",
        status: MilestoneStatus::Planned,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_sum_to_hundred_percent() {
        let total: u32 = TOKENOMICS.iter().map(|a| a.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_allocation_tokens_sum_to_supply() {
        let total: u64 = TOKENOMICS.iter().map(|a| a.tokens()).sum();
        assert_eq!(total, TOTAL_SUPPLY);
    }

    #[test]
    fn test_roadmap_phases_ordered() {
        for (i, m) in ROADMAP.iter().enumerate() {
            assert_eq!(m.phase, i as u32 + 1);
        }
    }

    #[test]
    fn test_roadmap_no_done_after_pending() {
        let first_pending = ROADMAP
            .iter()
            .position(|m| m.status != MilestoneStatus::Done)
            .unwrap_or(ROADMAP.len());
        assert!(ROADMAP[first_pending..]
            .iter()
            .all(|m| m.status != MilestoneStatus::Done));
    }

    #[test]
    fn test_milestone_status_display() {
        assert_eq!(MilestoneStatus::InProgress.to_string(), "In progress");
    }
}
