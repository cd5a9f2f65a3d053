//! Simulated time source.

use std::time::Duration;

use chrono::Local;
use gearwork_core::{SpeedPreset, seconds_since_midnight};

/// Seconds since local midnight right now.
pub fn wall_clock_seconds() -> f64 {
    seconds_since_midnight(Local::now().time())
}

/// Time value driving the clock. Runs at a speed multiple of real time,
/// can be paused, and never wraps: the display wraps, the hands don't.
#[derive(Debug, Clone)]
pub struct SimClock {
    total_seconds: f64,
    playing: bool,
    speed: SpeedPreset,
}

impl SimClock {
    pub fn new(start_seconds: f64, speed: SpeedPreset) -> Self {
        Self {
            total_seconds: start_seconds,
            playing: true,
            speed,
        }
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> SpeedPreset {
        self.speed
    }

    /// Advance by `delta` real time scaled by the speed, unless paused.
    pub fn tick(&mut self, delta: Duration) {
        if self.playing {
            self.total_seconds += delta.as_secs_f64() * self.speed.multiplier();
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Change speed and resume.
    pub fn set_speed(&mut self, speed: SpeedPreset) {
        self.speed = speed;
        self.playing = true;
    }

    /// Jump to `seconds` at real-time speed and resume.
    pub fn reset(&mut self, seconds: f64) {
        self.total_seconds = seconds;
        self.speed = SpeedPreset::RealTime;
        self.playing = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_scales_by_speed() {
        let mut clock = SimClock::new(100.0, SpeedPreset::Minute);
        clock.tick(Duration::from_millis(500));
        assert_eq!(clock.total_seconds(), 130.0);
    }

    #[test]
    fn test_paused_clock_holds() {
        let mut clock = SimClock::new(10.0, SpeedPreset::Hour);
        clock.toggle_play();
        assert!(!clock.is_playing());
        clock.tick(Duration::from_secs(5));
        assert_eq!(clock.total_seconds(), 10.0);
    }

    #[test]
    fn test_set_speed_resumes() {
        let mut clock = SimClock::new(0.0, SpeedPreset::RealTime);
        clock.toggle_play();
        clock.set_speed(SpeedPreset::Hour);
        assert!(clock.is_playing());
        clock.tick(Duration::from_secs(1));
        assert_eq!(clock.total_seconds(), 3600.0);
    }

    #[test]
    fn test_does_not_wrap_past_a_day() {
        let mut clock = SimClock::new(86_000.0, SpeedPreset::Hour);
        clock.tick(Duration::from_secs(1));
        assert_eq!(clock.total_seconds(), 89_600.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimClock::new(0.0, SpeedPreset::Hour);
        clock.toggle_play();
        clock.reset(500.0);
        assert_eq!(clock.total_seconds(), 500.0);
        assert_eq!(clock.speed(), SpeedPreset::RealTime);
        assert!(clock.is_playing());
    }

    #[test]
    fn test_wall_clock_within_a_day() {
        let now = wall_clock_seconds();
        assert!((0.0..86_401.0).contains(&now));
    }
}
