// Net motion: constant speed along a bounded track, bouncing off both ends.

use crate::config::HockeyConfig;

/// Allowed range for the net's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub min: f64,
    pub max: f64,
}

impl Track {
    /// A track never inverts; a rink too narrow for the net pins it at `min`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max: max.max(min) }
    }

    pub fn for_rink(rink_width: f64, cfg: &HockeyConfig) -> Self {
        Self::new(cfg.track_left, rink_width - cfg.net_width - cfg.track_right_gap)
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Net speed in px/s for the current goal count; the last tier is the cap.
pub fn speed_for(goals: u32, tiers: &[f64]) -> f64 {
    let idx = (goals as usize).min(tiers.len().saturating_sub(1));
    tiers.get(idx).copied().unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetMotion {
    /// Left edge of the net in rink pixels.
    pub x: f64,
    /// +1 moving right, -1 moving left.
    pub dir: f64,
    last_ts: Option<f64>,
}

impl NetMotion {
    pub fn new(track: &Track) -> Self {
        Self { x: track.min, dir: 1.0, last_ts: None }
    }

    /// Advance by a frame timestamp. The first frame after a (re)start only
    /// records the clock; later gaps are clamped to `max_dt_ms`.
    pub fn frame(&mut self, ts_ms: f64, max_dt_ms: f64, speed: f64, track: &Track) {
        let dt_ms = match self.last_ts {
            Some(prev) => (ts_ms - prev).clamp(0.0, max_dt_ms),
            None => 0.0,
        };
        self.last_ts = Some(ts_ms);
        self.step(dt_ms / 1000.0, speed, track);
    }

    /// Move for `dt_secs`. Clamp to the bound first, then reflect.
    pub fn step(&mut self, dt_secs: f64, speed: f64, track: &Track) {
        let next = self.x + self.dir * speed * dt_secs;
        if next >= track.max {
            self.x = track.max;
            self.dir = -1.0;
        } else if next <= track.min {
            self.x = track.min;
            self.dir = 1.0;
        } else {
            self.x = next;
        }
    }

    /// Forget the frame clock so the next frame does not see the pause as elapsed time.
    pub fn pause(&mut self) {
        self.last_ts = None;
    }

    pub fn reset(&mut self, track: &Track) {
        *self = Self::new(track);
    }
}
