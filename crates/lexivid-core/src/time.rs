use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A span of composition time, stored as fractional seconds.
///
/// Negative spans are clamped to zero on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Duration {
    seconds: f64,
}

impl Duration {
    /// Create a duration from seconds.
    pub fn from_seconds(s: f64) -> Self {
        Self {
            seconds: s.max(0.0),
        }
    }

    /// Create a zero duration.
    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }

    /// Get duration as seconds.
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Whether this duration is zero.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0.0
    }

    /// Number of frames this duration spans at the given frame rate.
    pub fn frame_count(&self, fps: f64) -> u64 {
        (self.seconds * fps).ceil() as u64
    }
}

impl Default for Duration {
    fn default() -> Self {
        Duration::zero()
    }
}

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds((self.seconds - rhs.seconds).max(0.0))
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;
    fn mul(self, rhs: f64) -> Duration {
        Duration::from_seconds(self.seconds * rhs)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds < 1.0 {
            write!(f, "{:.0}ms", self.seconds * 1000.0)
        } else {
            write!(f, "{:.2}s", self.seconds)
        }
    }
}

/// A point in composition time, measured from the start of the composition.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp {
    seconds: f64,
}

impl Timestamp {
    /// Create a timestamp from seconds.
    pub fn from_seconds(s: f64) -> Self {
        Self {
            seconds: s.max(0.0),
        }
    }

    /// The start of the composition (t = 0).
    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }

    /// Get the time in seconds.
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Convert to a frame index at the given frame rate.
    pub fn to_frame(&self, fps: f64) -> u64 {
        (self.seconds * fps).floor() as u64
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::zero()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp::from_seconds(self.seconds + rhs.as_seconds())
    }
}

impl Sub for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Timestamp) -> Duration {
        Duration::from_seconds(self.seconds - rhs.seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = (self.seconds * 1000.0) as u64;
        let minutes = total_ms / 60_000;
        let secs = (total_ms % 60_000) / 1_000;
        let ms = total_ms % 1_000;
        write!(f, "{:02}:{:02}.{:03}", minutes, secs, ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_clamps_negative() {
        assert!(Duration::from_seconds(-3.0).is_zero());
    }

    #[test]
    fn test_duration_frame_count() {
        assert_eq!(Duration::from_seconds(15.0).frame_count(30.0), 450);
        assert_eq!(Duration::from_seconds(0.5).frame_count(30.0), 15);
    }

    #[test]
    fn test_duration_arithmetic() {
        let a = Duration::from_seconds(2.0);
        let b = Duration::from_seconds(0.5);
        assert!(((a + b).as_seconds() - 2.5).abs() < 1e-9);
        assert!(((a - b).as_seconds() - 1.5).abs() < 1e-9);
        assert!(((a * 3.0).as_seconds() - 6.0).abs() < 1e-9);
        // Subtraction saturates at zero
        assert!((b - a).is_zero());
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(format!("{}", Duration::from_seconds(15.0)), "15.00s");
        assert_eq!(format!("{}", Duration::from_seconds(0.5)), "500ms");
    }

    #[test]
    fn test_timestamp_to_frame() {
        assert_eq!(Timestamp::from_seconds(2.5).to_frame(30.0), 75);
    }

    #[test]
    fn test_timestamp_add_sub() {
        let t = Timestamp::from_seconds(3.0) + Duration::from_seconds(5.0);
        assert!((t.as_seconds() - 8.0).abs() < 1e-9);
        let d = t - Timestamp::from_seconds(3.0);
        assert!((d.as_seconds() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(format!("{}", Timestamp::from_seconds(65.25)), "01:05.250");
    }
}
