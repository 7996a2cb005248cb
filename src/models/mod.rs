pub mod day_type;
pub mod problem;
pub mod punch_kind;
pub mod record;
pub mod slot;

pub use day_type::DayType;
pub use problem::ProblemType;
pub use punch_kind::PunchKind;
pub use record::{Anomaly, BreakDurations, DailyPunchRecord, Durations, IntervalReport};
pub use slot::{NO_PUNCH, Slot, SlotMap};
