use std::time::{Duration, Instant};

use eframe::egui::Color32;
use log::trace;

use crate::format::Breakdown;
use crate::pulse::AccentPulse;
use crate::tracker::{SystemClock, TimeSource, Tracker};
use crate::APP_TITLE;

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Window title mirroring the counter.
pub fn window_title(readout: Breakdown) -> String {
    format!("{}  |  {}", APP_TITLE, readout)
}

/// Owns the tracker and decides when a tick is due. Everything here runs on
/// the UI thread from inside `App::update`.
pub struct DisplayLoop<C: TimeSource = SystemClock> {
    tracker: Tracker<C>,
    pulse: Option<AccentPulse>,
    next_tick: Instant,
    readout: Breakdown,
}

impl<C: TimeSource> DisplayLoop<C> {
    /// Renders once immediately and schedules the first tick.
    pub fn new(tracker: Tracker<C>, accent_pulse: bool) -> Self {
        let next_tick = tracker.now() + TICK_INTERVAL;
        let readout = Breakdown::from_secs(tracker.elapsed());
        Self {
            tracker,
            pulse: accent_pulse.then(AccentPulse::default),
            next_tick,
            readout,
        }
    }

    /// Runs a tick if one is due. Returns whether it did.
    ///
    /// Missed ticks are not replayed; the schedule restarts from now.
    pub fn poll(&mut self) -> bool {
        let now = self.tracker.now();
        if now < self.next_tick {
            return false;
        }
        self.next_tick += TICK_INTERVAL;
        if self.next_tick <= now {
            self.next_tick = now + TICK_INTERVAL;
        }
        self.tick();
        true
    }

    pub fn tick(&mut self) {
        self.render();
        if let Some(pulse) = &mut self.pulse {
            pulse.advance();
        }
        trace!("tick {}", self.readout);
    }

    /// Rebases the tracker and re-renders straight away.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.render();
    }

    fn render(&mut self) {
        self.readout = Breakdown::from_secs(self.tracker.elapsed());
    }

    pub fn readout(&self) -> Breakdown {
        self.readout
    }

    pub fn elapsed(&self) -> u64 {
        self.tracker.elapsed()
    }

    /// How long until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.next_tick.saturating_duration_since(self.tracker.now())
    }

    /// Colour for the numerals; plain white when the pulse is off.
    pub fn accent(&self) -> Color32 {
        self.pulse.map_or(Color32::WHITE, |p| p.color())
    }

    #[cfg(test)]
    fn pulse_phase(&self) -> Option<u8> {
        self.pulse.map(|p| p.phase())
    }
}
