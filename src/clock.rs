use core::fmt::{self, Write};

use heapless::String;

use crate::counter::BoundedCounter;
use crate::error::{ClockError, Result};

/// `HH:MM AM` is always exactly eight bytes.
pub type DisplayString = String<8>;

const HOURS_PER_DAY: u8 = 24;
const MINUTES_PER_HOUR: u8 = 60;

const HOURS: BoundedCounter = match BoundedCounter::new(HOURS_PER_DAY) {
    Ok(counter) => counter,
    Err(_) => panic!("hour limit must be positive"),
};
const MINUTES: BoundedCounter = match BoundedCounter::new(MINUTES_PER_HOUR) {
    Ok(counter) => counter,
    Err(_) => panic!("minute limit must be positive"),
};

/// Half of the day an hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 12-hour clock face over 24-hour state.
///
/// The hour counter wraps at 24 and the minute counter at 60. The text shown
/// by [`time`](Self::time) is rebuilt after every mutation, so reads never
/// see a stale value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    hours: BoundedCounter,
    minutes: BoundedCounter,
    text: DisplayString,
}

impl ClockDisplay {
    /// A clock at midnight, shown as `12:00 AM`.
    pub fn new() -> Self {
        let mut clock = Self {
            hours: HOURS,
            minutes: MINUTES,
            text: DisplayString::new(),
        };
        clock.update_display();
        clock
    }

    pub fn with_time(hour: u8, minute: u8) -> Result<Self> {
        let mut clock = Self::new();
        clock.set_time(hour, minute)?;
        Ok(clock)
    }

    /// Advances the clock by one minute. The hour moves only when the minutes roll over.
    pub fn time_tick(&mut self) {
        if self.minutes.increment() {
            self.hours.increment();
            #[cfg(feature = "defmt")]
            defmt::trace!("hour advanced to {=u8}", self.hours.value());
        }
        self.update_display();
    }

    /// Sets both counters, or neither if either value is out of range.
    pub fn set_time(&mut self, hour: u8, minute: u8) -> Result<()> {
        let mut hours = self.hours;
        let mut minutes = self.minutes;
        if let Err(err) = hours.set_value(hour).and_then(|()| minutes.set_value(minute)) {
            #[cfg(feature = "defmt")]
            defmt::debug!("rejected set_time({=u8}, {=u8}): {}", hour, minute, err);
            return Err(err);
        }

        self.hours = hours;
        self.minutes = minutes;
        self.update_display();
        Ok(())
    }

    /// The cached `HH:MM AM|PM` text.
    pub fn time(&self) -> &str {
        &self.text
    }

    /// Hour of the day, 0 through 23.
    pub const fn hours(&self) -> u8 {
        self.hours.value()
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes.value()
    }

    /// Hour as printed on the face, 1 through 12.
    pub const fn hour_12(&self) -> u8 {
        match self.hours.value() % 12 {
            0 => 12,
            hour => hour,
        }
    }

    pub const fn period(&self) -> Period {
        Period::from_hour(self.hours.value())
    }

    fn update_display(&mut self) {
        let (hour, minutes, period) = (self.hour_12(), self.minutes, self.period());
        self.text.clear();
        // Capacity matches the fixed format, so the write cannot overflow.
        let _ = write!(self.text, "{:02}:{} {}", hour, minutes, period);
    }
}

impl Default for ClockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.time())
    }
}

/// Builds a clock from signed input, rejecting negatives as well as values past the limits.
impl TryFrom<(i32, i32)> for ClockDisplay {
    type Error = ClockError;

    fn try_from((hour, minute): (i32, i32)) -> Result<Self> {
        let hour = u8::try_from(hour).map_err(|_| ClockError::InvalidArgument {
            value: hour,
            limit: HOURS_PER_DAY,
        })?;
        let minute = u8::try_from(minute).map_err(|_| ClockError::InvalidArgument {
            value: minute,
            limit: MINUTES_PER_HOUR,
        })?;
        Self::with_time(hour, minute)
    }
}
