/// Review statuses the homework API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Reviewing,
        ReviewStatus::Rejected,
    ];

    /// Looks up a status by its API code. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Sentence shown to the user for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReviewStatus;

    #[test]
    fn codes_round_trip_through_lookup() {
        for status in ReviewStatus::ALL {
            assert_eq!(ReviewStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ReviewStatus::from_code("Approved"), None);
        assert_eq!(ReviewStatus::from_code(""), None);
    }
}
