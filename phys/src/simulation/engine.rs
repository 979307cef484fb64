//! High-level runtime settings for the scene driver
//!
//! Tick interval, splash delay and viewer sizes used when
//! running a `Scenario`

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Engine {
    pub window: (u32, u32), // window size in pixels
    pub tick: Duration, // fixed physics interval
    pub splash: Duration, // delay before the first tick
    pub arrow_length: f64, // base length of the direction arrow
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            window: (800, 650),
            tick: Duration::from_millis(16),
            splash: Duration::from_secs(3),
            arrow_length: 25.0,
        }
    }
}
