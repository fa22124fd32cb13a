use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Daily delivery time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeliveryTime {
    minutes: u16,
}

impl DeliveryTime {
    /// Parse an `HH:MM` wall-clock time.
    pub fn parse(input: &str) -> Option<Self> {
        let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()?;
        Self::from_hm(time.hour(), time.minute())
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }
}

impl Default for DeliveryTime {
    /// 06:00
    fn default() -> Self {
        Self { minutes: 6 * 60 }
    }
}

impl fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats() {
        let time = DeliveryTime::parse(" 07:30 ").unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.to_string(), "07:30");
    }

    #[test]
    fn default_is_six_am() {
        assert_eq!(DeliveryTime::default().to_string(), "06:00");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(DeliveryTime::parse("25:00").is_none());
        assert!(DeliveryTime::parse("12:60").is_none());
        assert!(DeliveryTime::parse("sunrise").is_none());
        assert!(DeliveryTime::parse("").is_none());
        assert!(DeliveryTime::from_hm(24, 0).is_none());
    }
}
