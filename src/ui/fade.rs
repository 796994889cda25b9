//! One-shot entry effect for the current lyric line.
//!
//! Terminal cells have no opacity, so the fade is approximated in three
//! steps: dim, plain, then the settled emphasis of the current slot.

use std::time::{Duration, Instant};

/// Length of the entry effect.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    Dim,
    Plain,
    Settled,
}

/// Fire-and-forget fade. Triggering again restarts it from the beginning.
#[derive(Debug, Default, Clone)]
pub struct FadeIn {
    started: Option<Instant>,
}

impl FadeIn {
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    pub fn trigger_at(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn reset(&mut self) {
        self.started = None;
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Instant::now())
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < FADE_DURATION)
    }

    pub fn step(&self) -> FadeStep {
        self.step_at(Instant::now())
    }

    pub fn step_at(&self, now: Instant) -> FadeStep {
        let Some(started) = self.started else {
            return FadeStep::Settled;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed < FADE_DURATION / 3 {
            FadeStep::Dim
        } else if elapsed < FADE_DURATION * 2 / 3 {
            FadeStep::Plain
        } else {
            FadeStep::Settled
        }
    }
}
