/// Qualitative performance label derived from the score ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Great,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    /// Band for `score` out of `total`.
    ///
    /// A `total` of zero is treated as a ratio of zero.
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        let ratio = if total == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(total)
        };

        if total > 0 && score >= total {
            Self::Perfect
        } else if ratio >= 0.7 {
            Self::Great
        } else if ratio >= 0.4 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Great => "great",
            Self::Good => "good",
            Self::NeedsImprovement => "needs improvement",
        }
    }

    /// Encouragement shown on the final score screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Excellent! Perfect score!",
            Self::Great => "Great job! You did well!",
            Self::Good => "Good effort! Keep practicing!",
            Self::NeedsImprovement => "Needs improvement. Try again!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::from_score(10, 10), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_score(9, 10), ScoreBand::Great);
        assert_eq!(ScoreBand::from_score(7, 10), ScoreBand::Great);
        assert_eq!(ScoreBand::from_score(6, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(4, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(3, 10), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(0, 10), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn zero_total_is_guarded() {
        assert_eq!(ScoreBand::from_score(0, 0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn short_quizzes_use_the_ratio() {
        assert_eq!(ScoreBand::from_score(3, 3), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_score(2, 3), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(1, 3), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn labels_and_messages() {
        assert_eq!(ScoreBand::NeedsImprovement.label(), "needs improvement");
        assert_eq!(ScoreBand::Perfect.message(), "Excellent! Perfect score!");
    }
}
