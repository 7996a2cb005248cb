use punchsheet::core::correction::{infer_kind, insert_punch, rebuild_pairs};
use punchsheet::models::punch_kind::PunchKind;
use punchsheet::models::slot::{Slot, SlotMap};
use punchsheet::utils::time::ClockTime;

fn t(s: &str) -> ClockTime {
    s.parse().expect("valid time")
}

fn slots(raw: &[&str]) -> SlotMap {
    let times: Vec<ClockTime> = raw.iter().map(|s| t(s)).collect();
    SlotMap::positional(&times).0
}

#[test]
fn test_keywords_decide_the_kind() {
    assert_eq!(infer_kind("falta entrada", t("08:00"), &[]), PunchKind::Entry);
    assert_eq!(infer_kind("Saída em falta", t("17:00"), &[]), PunchKind::Exit);
    assert_eq!(infer_kind("almoço", t("11:45"), &[]), PunchKind::Exit);
    assert_eq!(infer_kind("almoço", t("13:00"), &[]), PunchKind::Entry);
}

#[test]
fn test_imbalance_decides_without_keywords() {
    let existing = [
        (PunchKind::Entry, t("08:00")),
        (PunchKind::Exit, t("12:00")),
        (PunchKind::Entry, t("13:00")),
    ];
    assert_eq!(infer_kind("", t("17:00"), &existing), PunchKind::Exit);
    assert_eq!(infer_kind("", t("08:00"), &existing[..2]), PunchKind::Entry);
    assert_eq!(infer_kind("", t("08:00"), &[]), PunchKind::Entry);
}

#[test]
fn test_rebuild_pairs_kth_entry_with_kth_exit() {
    let out = rebuild_pairs(vec![
        (PunchKind::Exit, t("17:00")),
        (PunchKind::Entry, t("13:00")),
        (PunchKind::Entry, t("08:00")),
        (PunchKind::Exit, t("12:00")),
    ]);
    let rendered: Vec<String> = out.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, ["08:00", "12:00", "13:00", "17:00"]);
}

#[test]
fn test_unpaired_leftovers_go_last() {
    let out = rebuild_pairs(vec![
        (PunchKind::Entry, t("08:00")),
        (PunchKind::Exit, t("12:00")),
        (PunchKind::Entry, t("13:00")),
        (PunchKind::Entry, t("14:00")),
    ]);
    let rendered: Vec<String> = out.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, ["08:00", "12:00", "13:00", "14:00"]);
}

#[test]
fn test_insert_missing_final_exit() {
    let before = slots(&["08:00", "12:00", "13:00"]);
    let c = insert_punch(&before, &[], t("17:00"), "missing final exit");
    assert_eq!(c.kind, PunchKind::Exit);
    assert_eq!(c.before, before);
    assert_eq!(c.after.display(Slot::S2), "17:00");
    assert_eq!(c.after.count(), 4);
    assert!(c.overflow.is_empty());
}

#[test]
fn test_insert_forgotten_entry_reorders() {
    // S1 only: the first punch read is an exit
    let mut before = SlotMap::new();
    before.set(Slot::S1, Some(t("12:00")));
    before.set(Slot::E2, Some(t("13:00")));
    before.set(Slot::S2, Some(t("17:00")));

    let c = insert_punch(&before, &[], t("08:00"), "missing entry");
    assert_eq!(c.kind, PunchKind::Entry);
    assert_eq!(c.after.display(Slot::E1), "08:00");
    assert_eq!(c.after.display(Slot::S1), "12:00");
    assert_eq!(c.after.display(Slot::E2), "13:00");
    assert_eq!(c.after.display(Slot::S2), "17:00");
}

#[test]
fn test_ninth_punch_overflows() {
    let before = slots(&[
        "08:00", "10:00", "10:15", "12:00", "13:00", "15:00", "15:15", "17:00",
    ]);
    let c = insert_punch(&before, &[], t("18:00"), "");
    assert_eq!(c.kind, PunchKind::Entry);
    assert_eq!(c.after.count(), 8);
    assert_eq!(c.overflow, vec![t("18:00")]);
}
