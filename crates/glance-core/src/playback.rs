//! Reading cadence: pause/resume state and generation-tagged step timers.
//!
//! Every scheduled step remembers the generation it was scheduled under.
//! Toggling playback bumps the generation, so a step scheduled before a
//! pause can fire later without advancing anything.

use heapless::Vec as HeaplessVec;
use log::debug;

const MAX_PENDING_STEPS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Paused,
    Running,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    /// Delay applied while resting on the first word of a line, in percent of
    /// the per-word delay.
    pub line_start_dwell_pct: u16,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            wpm: 200,
            min_wpm: 10,
            line_start_dwell_pct: 150,
        }
    }
}

/// Permission to run one step, valid only for the generation that issued it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepTicket {
    generation: u32,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledStep {
    generation: u32,
    due_ms: u64,
}

#[derive(Clone, Debug)]
pub struct Playback {
    state: PlaybackState,
    generation: u32,
    config: PlaybackConfig,
    timers: HeaplessVec<ScheduledStep, MAX_PENDING_STEPS>,
}

impl Playback {
    pub fn new(mut config: PlaybackConfig) -> Self {
        config.min_wpm = config.min_wpm.max(1);
        config.wpm = config.wpm.max(config.min_wpm);

        Self {
            state: PlaybackState::Paused,
            generation: 0,
            config,
            timers: HeaplessVec::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn set_wpm(&mut self, wpm: u16) {
        self.config.wpm = wpm.max(self.config.min_wpm);
    }

    pub fn increase_speed(&mut self, delta: u16) -> u16 {
        self.config.wpm = self.config.wpm.saturating_add(delta);
        self.config.wpm
    }

    pub fn decrease_speed(&mut self, delta: u16) -> u16 {
        self.config.wpm = self
            .config
            .wpm
            .saturating_sub(delta)
            .max(self.config.min_wpm);
        self.config.wpm
    }

    /// Delay before the next step. Resting on the first word of a line waits
    /// longer.
    pub fn step_delay_ms(&self, at_line_start: bool) -> u64 {
        let base = (60_000u64 / self.config.wpm.max(1) as u64).max(1);
        if at_line_start {
            base * self.config.line_start_dwell_pct as u64 / 100
        } else {
            base
        }
    }

    /// Flips Paused and Running. Entering Running schedules the first step
    /// `delay_ms` from `now_ms`.
    pub fn toggle(&mut self, now_ms: u64, delay_ms: u64) -> PlaybackState {
        self.generation = self.generation.wrapping_add(1);
        self.state = match self.state {
            PlaybackState::Paused => PlaybackState::Running,
            PlaybackState::Running => PlaybackState::Paused,
        };

        if self.is_running() {
            self.schedule(now_ms + delay_ms);
        }

        debug!(
            "playback: toggle state={:?} generation={}",
            self.state, self.generation
        );
        self.state
    }

    /// Stops playback; steps already scheduled become stale.
    pub fn pause(&mut self) {
        if self.is_running() {
            self.generation = self.generation.wrapping_add(1);
            self.state = PlaybackState::Paused;
            debug!("playback: paused generation={}", self.generation);
        }
    }

    /// Fires every timer due at `now_ms`. Stale timers are dropped silently;
    /// the first live one is returned as a ticket.
    pub fn poll_due(&mut self, now_ms: u64) -> Option<StepTicket> {
        loop {
            let (position, timer) = self
                .timers
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, timer)| timer.due_ms <= now_ms)
                .min_by_key(|(_, timer)| timer.due_ms)?;
            self.timers.swap_remove(position);

            if timer.generation == self.generation && self.is_running() {
                return Some(StepTicket {
                    generation: timer.generation,
                });
            }

            debug!(
                "playback: stale step generation={} live={}",
                timer.generation, self.generation
            );
        }
    }

    /// Schedules the step following `ticket`. Refused when the ticket's
    /// generation is no longer live.
    pub fn reschedule(&mut self, ticket: StepTicket, now_ms: u64, delay_ms: u64) -> bool {
        if ticket.generation != self.generation || !self.is_running() {
            return false;
        }

        self.schedule(now_ms + delay_ms);
        true
    }

    /// Earliest pending timer, live or stale.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|timer| timer.due_ms).min()
    }

    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }

    fn schedule(&mut self, due_ms: u64) {
        if self.timers.is_full() {
            let live = self.generation;
            self.timers.retain(|timer| timer.generation == live);
        }

        let _ = self.timers.push(ScheduledStep {
            generation: self.generation,
            due_ms,
        });
    }
}
