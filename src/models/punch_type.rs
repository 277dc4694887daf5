use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchType {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
    Edit,
}

impl PunchType {
    /// Stored/wire spelling, e.g. `CLOCK_IN`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "CLOCK_IN",
            PunchType::ClockOut => "CLOCK_OUT",
            PunchType::BreakStart => "BREAK_START",
            PunchType::BreakEnd => "BREAK_END",
            PunchType::Edit => "EDIT",
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, PunchType::Edit)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchSource {
    /// Emitted by the session state machine.
    Auto,
    /// Emitted by a user-initiated edit.
    Manual,
}

impl PunchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchSource::Auto => "AUTO",
            PunchSource::Manual => "MANUAL",
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, PunchSource::Manual)
    }
}
