use std::fmt;

/// Result tier shown on the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeTier {
    Excellent,
    Great,
    Good,
    KeepLearning,
}

impl GradeTier {
    /// Maps a whole-number percentage to its tier (90 / 70 / 50 thresholds).
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            70..=89 => Self::Great,
            50..=69 => Self::Good,
            _ => Self::KeepLearning,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GradeTier::Excellent => "Excellent",
            GradeTier::Great => "Great",
            GradeTier::Good => "Good",
            GradeTier::KeepLearning => "Keep Learning",
        }
    }
}

impl fmt::Display for GradeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `round(100 * score / total)` with halves rounded up. Zero when `total` is zero.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * score + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}
