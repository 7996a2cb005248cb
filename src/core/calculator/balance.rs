//! Effective hours, shortfall and overtime against the daily target.

use crate::models::day_type::DayType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub effective: i64,
    pub shortfall: i64,
    pub overtime: i64,
}

pub fn compute(total_work: i64, day_type: DayType, daily_target: i64) -> Balance {
    let effective = if day_type.counts_effective() {
        total_work
    } else {
        0
    };

    // the whole day is missing
    if day_type == DayType::FullAbsence {
        return Balance {
            effective,
            shortfall: daily_target,
            overtime: 0,
        };
    }

    let target = day_type.target_minutes(daily_target);
    if target == 0 {
        return Balance {
            effective,
            ..Balance::default()
        };
    }

    Balance {
        effective,
        shortfall: (target - effective).max(0),
        overtime: (effective - target).max(0),
    }
}
