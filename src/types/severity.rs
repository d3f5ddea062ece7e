//! Severity: ordered pollution-risk levels

// ============================================================================
// Severity
// ============================================================================

/// Pollution severity, ranked from lowest to highest risk.
///
/// The derived `Ord` follows the discriminants, so `Good` is the minimum and
/// `Hazardous` the maximum. Aggregates such as the worst level and the
/// critical filter rely on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Good = 0,
    Moderate = 1,
    Unhealthy = 2,
    VeryUnhealthy = 3,
    Hazardous = 4,
}

impl Severity {
    /// Every level in ascending order of risk.
    pub const ALL: [Severity; 5] = [
        Severity::Good,
        Severity::Moderate,
        Severity::Unhealthy,
        Severity::VeryUnhealthy,
        Severity::Hazardous,
    ];

    /// Lowest level counted as critical.
    pub const CRITICAL_FLOOR: Severity = Severity::Unhealthy;

    /// Human-readable label used in console output and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
        }
    }

    /// `Unhealthy` or worse.
    pub fn is_critical(self) -> bool {
        self >= Self::CRITICAL_FLOOR
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_good_to_hazardous() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should rank below {:?}", pair[0], pair[1]);
        }
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Hazardous));
        assert_eq!(Severity::ALL.iter().min(), Some(&Severity::Good));
    }

    #[test]
    fn labels_match_report_contract() {
        let labels: Vec<String> = Severity::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Good", "Moderate", "Unhealthy", "Very Unhealthy", "Hazardous"]
        );
    }

    #[test]
    fn critical_starts_at_unhealthy() {
        assert!(!Severity::Good.is_critical());
        assert!(!Severity::Moderate.is_critical());
        assert!(Severity::Unhealthy.is_critical());
        assert!(Severity::VeryUnhealthy.is_critical());
        assert!(Severity::Hazardous.is_critical());
    }
}
