//! Manual correction: insert one punch and rebuild the E/S pairs.

use crate::models::punch_kind::PunchKind;
use crate::models::slot::SlotMap;
use crate::utils::formatting::fold_label;
use crate::utils::time::ClockTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub kind: PunchKind,
    pub time: ClockTime,
    pub before: SlotMap,
    pub after: SlotMap,
    /// Punches beyond the eighth slot after the rebuild.
    pub overflow: Vec<ClockTime>,
}

/// Kind of a punch to insert.
///
/// Keywords in `hint` win ("entrada"/"entry", "saída"/"exit"; "almoço"/
/// "lunch" is an exit before noon and an entry after). Otherwise the
/// existing punches decide: more entries than exits means an exit, and a
/// first-ever punch is an entry.
pub fn infer_kind(hint: &str, time: ClockTime, existing: &[(PunchKind, ClockTime)]) -> PunchKind {
    let h = fold_label(hint);

    if h.contains("entrada") || h.contains("entry") || h.contains("chegada") {
        return PunchKind::Entry;
    }
    if h.contains("saida") || h.contains("exit") {
        return PunchKind::Exit;
    }
    if h.contains("almoco") || h.contains("lunch") {
        return if time < ClockTime::NOON {
            PunchKind::Exit
        } else {
            PunchKind::Entry
        };
    }

    let entries = existing.iter().filter(|(k, _)| k.is_entry()).count();
    let exits = existing.len() - entries;
    if entries > exits {
        PunchKind::Exit
    } else {
        PunchKind::Entry
    }
}

/// Chronological rebuild: the k-th entry is paired with the k-th exit,
/// unpaired leftovers (entries, then exits) go last.
pub fn rebuild_pairs(mut punches: Vec<(PunchKind, ClockTime)>) -> Vec<ClockTime> {
    punches.sort_by_key(|(_, t)| *t);

    let entries: Vec<ClockTime> = punches
        .iter()
        .filter(|(k, _)| k.is_entry())
        .map(|(_, t)| *t)
        .collect();
    let exits: Vec<ClockTime> = punches
        .iter()
        .filter(|(k, _)| k.is_exit())
        .map(|(_, t)| *t)
        .collect();

    let paired = entries.len().min(exits.len());
    let mut out = Vec::with_capacity(punches.len());
    for k in 0..paired {
        out.push(entries[k]);
        out.push(exits[k]);
    }
    out.extend_from_slice(&entries[paired..]);
    out.extend_from_slice(&exits[paired..]);
    out
}

/// Existing punches with the kind of the slot they sit in. Extra punches
/// past the eighth slot alternate from where the slots left off.
pub fn typed_punches(slots: &SlotMap, extra: &[ClockTime]) -> Vec<(PunchKind, ClockTime)> {
    let mut out: Vec<(PunchKind, ClockTime)> =
        slots.filled().into_iter().map(|(s, t)| (s.kind(), t)).collect();
    for (i, t) in extra.iter().enumerate() {
        let kind = if i % 2 == 0 {
            PunchKind::Entry
        } else {
            PunchKind::Exit
        };
        out.push((kind, *t));
    }
    out
}

/// Insert `time` into a day and lay the result out positionally.
pub fn insert_punch(
    slots: &SlotMap,
    extra: &[ClockTime],
    time: ClockTime,
    hint: &str,
) -> Correction {
    let existing = typed_punches(slots, extra);
    let kind = infer_kind(hint, time, &existing);

    let mut punches = existing;
    punches.push((kind, time));
    let ordered = rebuild_pairs(punches);
    let (after, overflow) = SlotMap::positional(&ordered);

    Correction {
        kind,
        time,
        before: *slots,
        after,
        overflow,
    }
}
