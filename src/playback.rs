use crate::trace::{Trace, TraceStep};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// No trace loaded.
    Idle,
    /// Trace loaded, no valid tick outstanding.
    Paused,
    /// A valid tick is outstanding.
    Playing,
}

/// Marks one generation of scheduled ticks. Pausing, loading, clearing,
/// or replaying bumps the controller's generation, which strands every
/// token handed out before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

/// A request for the embedder: fire `handle_tick(token)` after `delay`.
/// The controller owns no timer; whoever drives it supplies real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub token: TickToken,
    pub delay: Duration,
}

/// Steps a cursor through a finished trace, manually or on a timer.
/// All navigation clamps to the trace bounds; the controller never
/// panics on out-of-range input.
#[derive(Debug)]
pub struct PlaybackController {
    trace: Option<Trace>,
    cursor: usize,
    mode: PlaybackMode,
    interval: Duration,
    generation: u64,
}

impl PlaybackController {
    /// Starts idle, with the default 1 s auto-advance interval.
    pub fn new() -> Self {
        Self {
            trace: None,
            cursor: 0,
            mode: PlaybackMode::Idle,
            interval: Duration::from_millis(1000),
            generation: 0,
        }
    }

    /// Takes ownership of a trace and rewinds to its first step. Loading
    /// mid-playback cancels the pending tick and lands in `Paused`.
    pub fn load(&mut self, trace: Trace) {
        self.generation += 1;
        debug!(steps = trace.len(), "Loaded trace for playback");
        self.trace = Some(trace);
        self.cursor = 0;
        self.mode = PlaybackMode::Paused;
    }

    /// Drops the loaded trace and returns to `Idle`.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.trace = None;
        self.cursor = 0;
        self.mode = PlaybackMode::Idle;
    }

    /// One step forward, clamped to the last step. Legal in any state
    /// and never changes the mode.
    pub fn next(&mut self) {
        if let Some(trace) = &self.trace {
            self.cursor = (self.cursor + 1).min(trace.last_index());
        }
    }

    /// One step back, clamped to the first step.
    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jumps to `index`, clamped to the trace bounds.
    pub fn go_to(&mut self, index: usize) {
        if let Some(trace) = &self.trace {
            self.cursor = index.min(trace.last_index());
        }
    }

    /// Starts auto-advance and returns the first tick to schedule.
    /// With no trace loaded this is a no-op; with the cursor already on
    /// the last step the controller settles in `Paused` and returns
    /// nothing.
    pub fn play(&mut self) -> Option<ScheduledTick> {
        let last = self.trace.as_ref().map(Trace::last_index)?;
        self.generation += 1;
        if self.cursor >= last {
            self.mode = PlaybackMode::Paused;
            return None;
        }
        self.mode = PlaybackMode::Playing;
        Some(self.schedule())
    }

    /// Stops auto-advance. Any tick already handed out is stranded.
    pub fn pause(&mut self) {
        self.generation += 1;
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Paused;
        }
    }

    /// Advances one step for a due tick. Stale tokens and ticks arriving
    /// outside `Playing` are ignored. Reaching the last step pauses
    /// automatically; otherwise the next tick comes back for scheduling.
    pub fn handle_tick(&mut self, token: TickToken) -> Option<ScheduledTick> {
        if token != TickToken(self.generation) || self.mode != PlaybackMode::Playing {
            return None;
        }
        let last = self.trace.as_ref().map(Trace::last_index)?;

        self.cursor = (self.cursor + 1).min(last);
        if self.cursor >= last {
            self.mode = PlaybackMode::Paused;
            return None;
        }
        Some(self.schedule())
    }

    /// Changes the auto-advance interval. A tick already handed out
    /// keeps its old delay; the change applies from the next one.
    pub fn set_speed(&mut self, interval: Duration) {
        self.interval = interval;
    }

    fn schedule(&self) -> ScheduledTick {
        ScheduledTick {
            token: TickToken(self.generation),
            delay: self.interval,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current_step(&self) -> Option<&TraceStep> {
        self.trace.as_ref().and_then(|trace| trace.get(self.cursor))
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
