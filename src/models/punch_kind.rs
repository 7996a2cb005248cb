use serde::Serialize;

/// Whether a punch opens (entry, `E`) or closes (exit, `S`) a work span.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PunchKind {
    Entry,
    Exit,
}

impl PunchKind {
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::Entry => "entry",
            PunchKind::Exit => "exit",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, PunchKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, PunchKind::Exit)
    }
}
