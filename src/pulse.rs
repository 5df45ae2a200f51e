use eframe::egui::Color32;

/// Highest phase value before the pulse turns back.
pub const PULSE_PEAK: u8 = 40;
/// Phase change per tick.
pub const PULSE_STEP: u8 = 8;

/// Cosmetic accent that bounces between white and a warm tint, one step per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPulse {
    phase: u8,
    rising: bool,
}

impl Default for AccentPulse {
    fn default() -> Self {
        Self {
            phase: 0,
            rising: true,
        }
    }
}

impl AccentPulse {
    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn advance(&mut self) {
        if self.rising {
            self.phase = (self.phase + PULSE_STEP).min(PULSE_PEAK);
            if self.phase == PULSE_PEAK {
                self.rising = false;
            }
        } else {
            self.phase = self.phase.saturating_sub(PULSE_STEP);
            if self.phase == 0 {
                self.rising = true;
            }
        }
    }

    pub fn color(&self) -> Color32 {
        Color32::from_rgb(255, 255, 255 - self.phase)
    }
}
