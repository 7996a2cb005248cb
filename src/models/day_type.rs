use serde::Serialize;

/// Day classification label. Gates whether punch reconciliation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayType {
    Normal,
    PartialAbsence,
    FullAbsence,
    Vacation,
    Holiday,
    Weekend,
    Compensation,
    Training,
    HalfDay,
    Remote,
}

/// Exact (lower-cased) labels found in time-clock exports.
const ALIASES: &[(&str, DayType)] = &[
    ("normal", DayType::Normal),
    ("com extra", DayType::Normal),
    ("falta parcial", DayType::PartialAbsence),
    ("partial absence", DayType::PartialAbsence),
    ("falta", DayType::FullAbsence),
    ("falta justificada", DayType::FullAbsence),
    ("falta não justificada", DayType::FullAbsence),
    ("falta nao justificada", DayType::FullAbsence),
    ("ausência", DayType::FullAbsence),
    ("ausencia", DayType::FullAbsence),
    ("baixa médica", DayType::FullAbsence),
    ("baixa medica", DayType::FullAbsence),
    ("absence", DayType::FullAbsence),
    ("férias", DayType::Vacation),
    ("ferias", DayType::Vacation),
    ("vacation", DayType::Vacation),
    ("feriado", DayType::Holiday),
    ("holiday", DayType::Holiday),
    ("folga", DayType::Weekend),
    ("fim de semana", DayType::Weekend),
    ("weekend", DayType::Weekend),
    ("compensação", DayType::Compensation),
    ("compensacao", DayType::Compensation),
    ("compensation", DayType::Compensation),
    ("formação", DayType::Training),
    ("formacao", DayType::Training),
    ("training", DayType::Training),
    ("meio-dia", DayType::HalfDay),
    ("meio dia", DayType::HalfDay),
    ("half day", DayType::HalfDay),
    ("trabalho remoto", DayType::Remote),
    ("teletrabalho", DayType::Remote),
    ("remote", DayType::Remote),
];

/// Substring fallbacks, checked in order ("falta parcial" before "falta",
/// "feriado" before "férias").
const KEYWORDS: &[(&str, DayType)] = &[
    ("parcial", DayType::PartialAbsence),
    ("feriado", DayType::Holiday),
    ("féria", DayType::Vacation),
    ("feria", DayType::Vacation),
    ("folga", DayType::Weekend),
    ("semana", DayType::Weekend),
    ("compensa", DayType::Compensation),
    ("forma", DayType::Training),
    ("meio", DayType::HalfDay),
    ("remot", DayType::Remote),
    ("falta", DayType::FullAbsence),
    ("ausên", DayType::FullAbsence),
    ("baixa", DayType::FullAbsence),
];

impl DayType {
    pub const ALL: [DayType; 10] = [
        DayType::Normal,
        DayType::PartialAbsence,
        DayType::FullAbsence,
        DayType::Vacation,
        DayType::Holiday,
        DayType::Weekend,
        DayType::Compensation,
        DayType::Training,
        DayType::HalfDay,
        DayType::Remote,
    ];

    /// Canonical export label (`Tipo` column).
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Normal => "Normal",
            DayType::PartialAbsence => "Falta parcial",
            DayType::FullAbsence => "Falta",
            DayType::Vacation => "Férias",
            DayType::Holiday => "Feriado",
            DayType::Weekend => "Folga",
            DayType::Compensation => "Compensação",
            DayType::Training => "Formação",
            DayType::HalfDay => "Meio-dia",
            DayType::Remote => "Trabalho Remoto",
        }
    }

    /// Parse a `Tipo` label. `None` for empty or unrecognised labels.
    pub fn from_label(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some((_, dt)) = ALIASES.iter().find(|(alias, _)| *alias == key) {
            return Some(*dt);
        }

        KEYWORDS
            .iter()
            .find(|(kw, _)| key.contains(kw))
            .map(|(_, dt)| *dt)
    }

    /// False for days on which no punches are expected at all.
    pub fn expects_punches(&self) -> bool {
        !matches!(
            self,
            DayType::Vacation
                | DayType::Holiday
                | DayType::Weekend
                | DayType::FullAbsence
                | DayType::Compensation
        )
    }

    /// Vacation, holiday and full absence force every duration to zero.
    pub fn zeroes_durations(&self) -> bool {
        matches!(
            self,
            DayType::Vacation | DayType::Holiday | DayType::FullAbsence
        )
    }

    /// Whether worked time counts as effective hours.
    pub fn counts_effective(&self) -> bool {
        !matches!(
            self,
            DayType::FullAbsence | DayType::Vacation | DayType::Holiday | DayType::Weekend
        )
    }

    /// Daily target for shortfall/overtime, in minutes.
    pub fn target_minutes(&self, daily_target: i64) -> i64 {
        match self {
            DayType::Normal | DayType::PartialAbsence | DayType::Training | DayType::Remote => {
                daily_target
            }
            DayType::HalfDay => daily_target / 2,
            _ => 0,
        }
    }
}
