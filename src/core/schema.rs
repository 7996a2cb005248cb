//! Column discovery for time-clock rows.
//!
//! Header names vary between exports, so they are first mapped onto
//! canonical names, then resolved into a `ColumnSpan`. A row whose headers
//! lack a required column does not resolve and is skipped by the caller.

use crate::models::slot::Slot;

pub const NUMBER_HEADER: &str = "Numero";
pub const NAME_HEADER: &str = "Nome";
pub const DEPARTMENT_HEADER: &str = "Departamento";
pub const DATE_HEADER: &str = "Data";
pub const TYPE_HEADER: &str = "Tipo";
pub const JUSTIFICATION_HEADER: &str = "Justificação";
/// Tabular layout only: punches that did not fit the eight slots.
pub const EXTRA_PUNCHES_HEADER: &str = "extra_punches";

/// Exact header variants → canonical name.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("Obj.", "Obj"),
    ("Objectivo", "Obj"),
    ("Objetivo", "Obj"),
    ("Aus.", "Aus"),
    ("Ausência", "Aus"),
    ("Efectivo", "Efect"),
    ("Efetivo", "Efect"),
    ("Justificacao", JUSTIFICATION_HEADER),
    ("Justification", JUSTIFICATION_HEADER),
    ("Número", NUMBER_HEADER),
];

/// Canonical header name. Period banners ("Período : 01/04/2025 - …")
/// all collapse to `Periodo`.
pub fn canonical_header(raw: &str) -> String {
    let h = raw.trim().trim_start_matches('\u{feff}');

    if let Some((_, canon)) = HEADER_ALIASES.iter().find(|(alias, _)| *alias == h) {
        return canon.to_string();
    }

    if h.starts_with("Período") || h.starts_with("Periodo") {
        return "Periodo".to_string();
    }

    h.to_string()
}

pub fn canonical_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|h| canonical_header(h.as_ref())).collect()
}

/// Resolved column positions, relative to the header slice they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpan {
    pub date: usize,
    pub day_type: Option<usize>,
    pub justification: usize,
    /// Slot columns inside the candidate zone `[E1, Justificação)`, in
    /// column order.
    pub slots: Vec<(Slot, usize)>,
}

impl ColumnSpan {
    /// Requires `Data`, `E1` and `Justificação`, with `E1` before
    /// `Justificação`.
    pub fn resolve(headers: &[String]) -> Option<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let date = position(DATE_HEADER)?;
        let justification = position(JUSTIFICATION_HEADER)?;
        let first_slot = position(Slot::E1.name())?;
        if first_slot >= justification {
            return None;
        }

        let slots = headers[first_slot..justification]
            .iter()
            .enumerate()
            .filter_map(|(offset, h)| Slot::from_name(h).map(|s| (s, first_slot + offset)))
            .collect();

        Some(Self {
            date,
            day_type: position(TYPE_HEADER),
            justification,
            slots,
        })
    }
}
