use crate::remote::Badge;

/// A badge and the score that unlocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Minimum percentage of correct answers; `None` means any correct answer.
    pub min_percent: Option<usize>,
}

impl BadgeRule {
    pub fn is_met(&self, score: usize, total: usize) -> bool {
        match self.min_percent {
            None => score >= 1,
            Some(percent) => total > 0 && score * 100 >= percent * total,
        }
    }

    pub fn badge(&self) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

/// Checked in order; the first unmet-but-earned rule wins.
pub const BADGE_RULES: [BadgeRule; 4] = [
    BadgeRule {
        id: "perfect",
        name: "Perfect Harmony",
        icon: "👑",
        min_percent: Some(100),
    },
    BadgeRule {
        id: "scholar",
        name: "Cosmic Scholar",
        icon: "🌟",
        min_percent: Some(80),
    },
    BadgeRule {
        id: "seeker",
        name: "Truth Seeker",
        icon: "🔮",
        min_percent: Some(60),
    },
    BadgeRule {
        id: "initiate",
        name: "Initiate",
        icon: "✨",
        min_percent: None,
    },
];

/// The badge earned at `score` out of `total` that isn't in `unlocked` yet.
pub fn next_badge(score: usize, total: usize, unlocked: &[Badge]) -> Option<Badge> {
    BADGE_RULES
        .iter()
        .find(|rule| rule.is_met(score, total) && !unlocked.iter().any(|b| b.id == rule.id))
        .map(BadgeRule::badge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn first_correct_answer_unlocks_initiate() {
        let badge = next_badge(1, 10, &[]).unwrap();
        assert_eq!(badge.id, "initiate");
    }

    #[test]
    fn higher_badges_take_precedence() {
        assert_eq!(next_badge(5, 5, &[]).unwrap().id, "perfect");
        assert_eq!(next_badge(4, 5, &[]).unwrap().id, "scholar");
        assert_eq!(next_badge(3, 5, &[]).unwrap().id, "seeker");
    }

    #[test]
    fn unlocked_badges_are_skipped() {
        let unlocked = vec![BADGE_RULES[0].badge(), BADGE_RULES[1].badge()];
        assert_eq!(ids(&unlocked), vec!["perfect", "scholar"]);
        assert_eq!(next_badge(5, 5, &unlocked).unwrap().id, "seeker");
    }

    #[test]
    fn nothing_left_to_unlock() {
        let all: Vec<Badge> = BADGE_RULES.iter().map(BadgeRule::badge).collect();
        assert!(next_badge(5, 5, &all).is_none());
        assert!(next_badge(0, 5, &[]).is_none());
    }

    #[test]
    fn empty_quiz_only_counts_raw_score() {
        assert!(next_badge(0, 0, &[]).is_none());
    }
}
