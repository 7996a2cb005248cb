//! The eight canonical punch slots and the per-day slot map.

use super::punch_kind::PunchKind;
use crate::utils::time::ClockTime;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Rendering of an empty slot ("no punch").
pub const NO_PUNCH: &str = "00:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    E1,
    S1,
    E2,
    S2,
    E3,
    S3,
    E4,
    S4,
}

impl Slot {
    /// Canonical order: E1, S1, E2, S2, E3, S3, E4, S4.
    pub const ALL: [Slot; 8] = [
        Slot::E1,
        Slot::S1,
        Slot::E2,
        Slot::S2,
        Slot::E3,
        Slot::S3,
        Slot::E4,
        Slot::S4,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> PunchKind {
        if self.index() % 2 == 0 {
            PunchKind::Entry
        } else {
            PunchKind::Exit
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::E1 => "E1",
            Slot::S1 => "S1",
            Slot::E2 => "E2",
            Slot::S2 => "S2",
            Slot::E3 => "E3",
            Slot::S3 => "S3",
            Slot::E4 => "E4",
            Slot::S4 => "S4",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|slot| slot.name() == s.trim())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered mapping of the eight slots to an optional clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotMap([Option<ClockTime>; 8]);

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional fill: the k-th time goes to the k-th canonical slot.
    /// Times beyond the eighth are returned to the caller.
    pub fn positional(times: &[ClockTime]) -> (Self, Vec<ClockTime>) {
        let mut map = Self::new();
        for (slot, t) in Slot::ALL.iter().zip(times.iter()) {
            map.set(*slot, Some(*t));
        }
        let overflow = times.iter().skip(Slot::ALL.len()).copied().collect();
        (map, overflow)
    }

    pub fn get(&self, slot: Slot) -> Option<ClockTime> {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, value: Option<ClockTime>) {
        self.0[slot.index()] = value;
    }

    /// Non-empty slots in canonical order.
    pub fn filled(&self) -> Vec<(Slot, ClockTime)> {
        Slot::ALL
            .iter()
            .filter_map(|s| self.get(*s).map(|t| (*s, t)))
            .collect()
    }

    /// Non-empty times in canonical order.
    pub fn times(&self) -> Vec<ClockTime> {
        self.0.iter().flatten().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `HH:MM`, or `00:00` for an empty slot.
    pub fn display(&self, slot: Slot) -> String {
        self.get(slot)
            .map(|t| t.to_string())
            .unwrap_or_else(|| NO_PUNCH.to_string())
    }
}

impl Serialize for SlotMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Slot::ALL.len()))?;
        for slot in Slot::ALL {
            map.serialize_entry(slot.name(), &self.display(slot))?;
        }
        map.end()
    }
}
