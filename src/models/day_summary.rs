use super::shift::Shift;

/// One shift as shown in the "today" view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub shift: Shift,
    pub duration_seconds: u64,
    /// Any punch of this shift came from a manual edit.
    pub has_manual: bool,
    /// Comment of the most recent edit, if any.
    pub edit_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub entries: Vec<DayEntry>,
    pub total_seconds: u64,
}

impl DaySummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
