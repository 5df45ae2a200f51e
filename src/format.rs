use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;

/// Elapsed seconds split into the four displayed units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    pub fn from_secs(elapsed: u64) -> Self {
        Self {
            days: elapsed / SECS_PER_DAY,
            hours: (elapsed % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (elapsed % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: elapsed % SECS_PER_MINUTE,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    /// The fields in display order, each zero-padded to two digits.
    pub fn fields(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|v| format!("{:02}", v))
    }
}

/// Renders as `DD:HH:MM:SS`. Days widen past 99 instead of truncating.
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected DD:HH:MM:SS, got {0:?}")]
pub struct ParseBreakdownError(String);

impl FromStr for Breakdown {
    type Err = ParseBreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBreakdownError(s.to_string());
        let mut parts = s.split(':').map(|p| p.parse::<u64>().map_err(|_| err()));
        let (Some(days), Some(hours), Some(minutes), Some(seconds), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(err());
        };
        let b = Self {
            days: days?,
            hours: hours?,
            minutes: minutes?,
            seconds: seconds?,
        };
        if b.hours >= 24 || b.minutes >= 60 || b.seconds >= 60 {
            return Err(err());
        }
        Ok(b)
    }
}

/// Formats whole elapsed seconds as `DD:HH:MM:SS`.
pub fn format_elapsed(elapsed: u64) -> String {
    Breakdown::from_secs(elapsed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_elapsed(0), "00:00:00:00");
    }

    #[test]
    fn one_of_each() {
        let b = Breakdown::from_secs(90_061);
        assert_eq!(
            b,
            Breakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(b.to_string(), "01:01:01:01");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_elapsed(59), "00:00:00:59");
        assert_eq!(format_elapsed(60), "00:00:01:00");
        assert_eq!(format_elapsed(3599), "00:00:59:59");
        assert_eq!(format_elapsed(86_399), "00:23:59:59");
        assert_eq!(format_elapsed(86_400), "01:00:00:00");
    }

    #[test]
    fn days_widen() {
        assert_eq!(format_elapsed(100 * 86_400 + 5), "100:00:00:05");
        assert_eq!(Breakdown::from_secs(100 * 86_400).fields()[0], "100");
    }

    #[test]
    fn fields_parse_back_to_total() {
        for elapsed in [0, 1, 61, 4500, 90_061, 86_399, 31_536_000, u64::MAX / 2] {
            let b = Breakdown::from_secs(elapsed);
            assert_eq!(b.total_secs(), elapsed);
            assert_eq!(b.to_string().parse::<Breakdown>(), Ok(b));
        }
    }

    #[test]
    fn rejects_malformed() {
        assert!("01:01:01".parse::<Breakdown>().is_err());
        assert!("01:01:01:01:01".parse::<Breakdown>().is_err());
        assert!("00:24:00:00".parse::<Breakdown>().is_err());
        assert!("00:00:xx:00".parse::<Breakdown>().is_err());
        assert_eq!(
            "1:2".parse::<Breakdown>().unwrap_err().to_string(),
            "expected DD:HH:MM:SS, got \"1:2\""
        );
    }
}
