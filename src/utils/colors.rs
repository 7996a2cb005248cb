/// ANSI color helper utilities for terminal output.
use crate::models::problem::ProblemType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_problem(problem: ProblemType) -> &'static str {
    match problem {
        ProblemType::None | ProblemType::ExpectedNoData => RESET,
        ProblemType::LateEntry | ProblemType::EarlyExit => YELLOW,
        ProblemType::SequenceError | ProblemType::OddTimestamps | ProblemType::NoData => RED,
        ProblemType::UnexpectedPunchesOnNonWorkDay => MAGENTA,
        _ => CYAN,
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00:00" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

pub fn paint(color: &str, value: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
