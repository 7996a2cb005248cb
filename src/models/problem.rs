use serde::Serialize;

/// Outcome of the punctuality / anomaly analysis for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProblemType {
    /// Punches present and nothing to report.
    None,
    /// Day type (or sector calendar) expects no punches and there are none.
    ExpectedNoData,
    UnexpectedPunchesOnNonWorkDay,
    /// Work day without a single punch.
    NoData,
    OddTimestamps,
    MissingEntry,
    MissingExit,
    /// E1, S1, E2 present, S2 missing.
    MissingFinalExit,
    SequenceError,
    LateEntry,
    /// Late beyond the forgetting tolerance: probably a missed clock-in.
    PossibleForgottenEntry,
    EarlyExit,
}

impl ProblemType {
    /// Short human-readable label. Empty when there is no problem.
    pub fn label(&self) -> &'static str {
        match self {
            ProblemType::None | ProblemType::ExpectedNoData => "",
            ProblemType::UnexpectedPunchesOnNonWorkDay => "punches on non-working day",
            ProblemType::NoData => "no data",
            ProblemType::OddTimestamps => "odd number of punches",
            ProblemType::MissingEntry => "missing entry",
            ProblemType::MissingExit => "missing exit",
            ProblemType::MissingFinalExit => "missing final exit",
            ProblemType::SequenceError => "sequence error",
            ProblemType::LateEntry => "late entry",
            ProblemType::PossibleForgottenEntry => "possible forgotten entry",
            ProblemType::EarlyExit => "early exit",
        }
    }

    pub fn is_problem(&self) -> bool {
        !matches!(self, ProblemType::None | ProblemType::ExpectedNoData)
    }
}
