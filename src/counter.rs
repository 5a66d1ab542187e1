use core::fmt;

use crate::error::{ClockError, Result};

/// A counter that runs from 0 to `limit - 1` and wraps back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedCounter {
    value: u8,
    limit: u8,
}

impl BoundedCounter {
    /// Creates a counter at 0. A zero limit has no valid values and is rejected.
    pub const fn new(limit: u8) -> Result<Self> {
        if limit == 0 {
            return Err(ClockError::InvalidArgument { value: 0, limit });
        }
        Ok(Self { value: 0, limit })
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn limit(&self) -> u8 {
        self.limit
    }

    /// Advances by one. Returns true if the counter rolled over to 0.
    pub fn increment(&mut self) -> bool {
        self.value = ((u16::from(self.value) + 1) % u16::from(self.limit)) as u8;
        self.value == 0
    }

    /// Sets the value, rejecting anything outside `0..limit`.
    pub fn set_value(&mut self, value: u8) -> Result<()> {
        self.check(value)?;
        self.value = value;
        Ok(())
    }

    fn check(&self, value: u8) -> Result<()> {
        if value >= self.limit {
            return Err(ClockError::InvalidArgument {
                value: i32::from(value),
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Two-digit, zero-padded form of the value.
impl fmt::Display for BoundedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let counter = BoundedCounter::new(60).unwrap();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.limit(), 60);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(
            BoundedCounter::new(0),
            Err(ClockError::InvalidArgument { value: 0, limit: 0 })
        );
    }

    #[test]
    fn test_increment_wraps() {
        let mut counter = BoundedCounter::new(3).unwrap();
        assert!(!counter.increment());
        assert!(!counter.increment());
        assert_eq!(counter.value(), 2);
        assert!(counter.increment());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_increment_at_u8_max_limit() {
        let mut counter = BoundedCounter::new(u8::MAX).unwrap();
        counter.set_value(u8::MAX - 1).unwrap();
        assert!(counter.increment());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_limit_one_always_wraps() {
        let mut counter = BoundedCounter::new(1).unwrap();
        assert!(counter.increment());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_set_value_rejects_out_of_range() {
        let mut counter = BoundedCounter::new(24).unwrap();
        counter.set_value(23).unwrap();

        let err = counter.set_value(24).unwrap_err();
        assert_eq!(err, ClockError::InvalidArgument { value: 24, limit: 24 });
        // Value unchanged, not clamped or wrapped
        assert_eq!(counter.value(), 23);
    }

    #[test]
    fn test_display_is_zero_padded() {
        let mut counter = BoundedCounter::new(60).unwrap();
        counter.set_value(7).unwrap();
        assert_eq!(counter.to_string(), "07");
        counter.set_value(42).unwrap();
        assert_eq!(counter.to_string(), "42");
    }
}
