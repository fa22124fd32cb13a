/// Named streak milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub icon: &'static str,
    /// Minimum streak count for this milestone.
    pub threshold: u32,
}

// Highest first.
const MILESTONES: [Milestone; 5] = [
    Milestone {
        title: "Eternal Flame",
        icon: "🔥👑",
        threshold: 100,
    },
    Milestone {
        title: "Cosmic Bond",
        icon: "✨🌌",
        threshold: 50,
    },
    Milestone {
        title: "Stellar Connection",
        icon: "⭐💫",
        threshold: 30,
    },
    Milestone {
        title: "Weekly Ritual",
        icon: "🌙✨",
        threshold: 7,
    },
    Milestone {
        title: "New Spark",
        icon: "✨",
        threshold: 0,
    },
];

impl Milestone {
    pub fn for_count(count: u32) -> Milestone {
        MILESTONES
            .iter()
            .copied()
            .find(|m| count >= m.threshold)
            .unwrap_or(MILESTONES[MILESTONES.len() - 1])
    }
}
