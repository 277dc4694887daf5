//! Clock-in / break state machine.
//!
//! `Idle → ClockedIn ⇄ OnBreak → Idle`. A call that does not apply to the
//! current state is ignored and returns `Ok(None)`: a repeated button press
//! or command must never create a second shift or a second break.
//! Every applied transition is saved before returning.

use crate::core::store::ShiftStore;
use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{ActiveSession, Punch, PunchType, Shift};
use crate::utils::ids::make_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ClockedIn,
    OnBreak,
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::ClockedIn => "clocked in",
            SessionState::OnBreak => "on break",
        }
    }
}

pub struct SessionTracker<S> {
    active: Option<ActiveSession>,
    store: ShiftStore<S>,
}

impl<S: KeyValueStore> SessionTracker<S> {
    /// Restore the tracker from the substrate (load-or-default).
    pub fn load(kv: S) -> AppResult<Self> {
        let store = ShiftStore::load(kv)?;
        let active = store.load_active_session()?;
        Ok(Self { active, store })
    }

    pub fn state(&self) -> SessionState {
        match &self.active {
            None => SessionState::Idle,
            Some(s) if s.is_on_break() => SessionState::OnBreak,
            Some(_) => SessionState::ClockedIn,
        }
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn store(&self) -> &ShiftStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ShiftStore<S> {
        &mut self.store
    }

    pub fn into_store(self) -> ShiftStore<S> {
        self.store
    }

    fn save_active(&mut self) -> AppResult<()> {
        self.store.save_active_session(self.active.as_ref())
    }

    pub fn clock_in(&mut self, now: i64) -> AppResult<Option<Punch>> {
        if self.active.is_some() {
            return Ok(None);
        }

        let session = ActiveSession::new(make_id(now), now);
        let punch = Punch::auto(&session.shift_id, PunchType::ClockIn, now);

        self.active = Some(session);
        self.save_active()?;
        self.store.append_punch(punch.clone())?;

        Ok(Some(punch))
    }

    /// Close the session into a shift. A running break ends at `now`.
    pub fn clock_out(&mut self, now: i64) -> AppResult<Option<Shift>> {
        let Some(session) = self.active.as_ref() else {
            return Ok(None);
        };

        let mut closing = session.clone();
        closing.close_break(now);
        let shift = closing.into_shift(now);

        self.store.upsert_shift(shift.clone())?;
        self.store
            .append_punch(Punch::auto(&shift.id, PunchType::ClockOut, now))?;
        // in memory the session ends only once the shift is stored
        self.active = None;
        self.save_active()?;

        Ok(Some(shift))
    }

    pub fn start_break(&mut self, now: i64) -> AppResult<Option<Punch>> {
        let Some(session) = self.active.as_mut() else {
            return Ok(None);
        };
        if session.is_on_break() {
            return Ok(None);
        }

        // the clock may have been set back since clock-in
        let started = now.max(session.start_at);
        session.break_started_at = Some(started);
        let punch = Punch::auto(&session.shift_id, PunchType::BreakStart, started);

        self.save_active()?;
        self.store.append_punch(punch.clone())?;

        Ok(Some(punch))
    }

    pub fn end_break(&mut self, now: i64) -> AppResult<Option<Punch>> {
        let Some(session) = self.active.as_mut() else {
            return Ok(None);
        };
        if !session.close_break(now) {
            return Ok(None);
        }

        let punch = Punch::auto(&session.shift_id, PunchType::BreakEnd, now);

        self.save_active()?;
        self.store.append_punch(punch.clone())?;

        Ok(Some(punch))
    }

    /// Net seconds worked in the running session (fractional); 0 when idle.
    pub fn elapsed_seconds(&self, now: i64) -> f64 {
        self.active
            .as_ref()
            .map(|s| s.elapsed_seconds(now))
            .unwrap_or(0.0)
    }
}
