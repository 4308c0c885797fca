//! Rally speed progression
//!
//! Every `hits_per_speedup` paddle hits the ball gets `speed_increment`
//! faster, up to `max_ball_speed`. A point resets both counter and speed.

use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rally {
    /// Paddle hits since the last point
    pub hits: u32,
    /// Current ball speed, in `[ball_speed, max_ball_speed]`
    pub speed: f32,
}

impl Rally {
    pub fn new(config: &Config) -> Self {
        Self {
            hits: 0,
            speed: config.ball_speed,
        }
    }

    /// Count a paddle hit. Returns true when a speed step was reached and the
    /// ball velocity should be rescaled to [`Rally::speed`].
    pub fn record_hit(&mut self, config: &Config) -> bool {
        self.hits += 1;
        if config.hits_per_speedup == 0 || self.hits % config.hits_per_speedup != 0 {
            return false;
        }
        self.speed = (self.speed + config.speed_increment).min(config.max_ball_speed);
        log::debug!("Rally at {} hits, speed now {:.1}", self.hits, self.speed);
        true
    }

    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(config);
    }
}
