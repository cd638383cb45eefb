//! Runtime tunables. `Default` carries the constants the site ships with; with the
//! `serde_json` feature a page can override any subset via
//! `start_site_with_config`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// How an utterance should sound.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct VoiceStyle {
    pub rate: f32,
    pub pitch: f32,
    /// BCP-47 tag the voice should speak.
    pub lang: String,
    /// Voice-name fragments tried in order before falling back to any voice in `lang`.
    pub voice_hints: Vec<String>,
}

impl VoiceStyle {
    pub fn alphabet() -> Self {
        Self { rate: 0.85, pitch: 1.1, ..Self::default() }
    }

    pub fn hockey() -> Self {
        Self { rate: 0.9, pitch: 1.2, ..Self::default() }
    }
}

impl Default for VoiceStyle {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            lang: "en-US".to_string(),
            voice_hints: ["Samantha", "Google US English", "Microsoft Aria", "Karen"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Hockey timing, geometry and difficulty curve. Times are milliseconds,
/// distances are CSS pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HockeyConfig {
    pub goals_to_win: u32,
    pub net_width: f64,
    /// Extra slack on each side of the net that still counts as a goal.
    pub hit_margin: f64,
    /// Net speed in px/s indexed by goals scored; the last entry is the cap.
    pub speed_tiers: Vec<f64>,
    pub max_frame_dt_ms: f64,
    pub flight_ms: u32,
    pub result_ms: u32,
    pub win_delay_ms: u32,
    /// Leftmost net position.
    pub track_left: f64,
    /// Gap kept between the net's right edge and the rink wall.
    pub track_right_gap: f64,
    pub rink_width: f64,
    pub rink_height: f64,
}

impl Default for HockeyConfig {
    fn default() -> Self {
        Self {
            goals_to_win: 5,
            net_width: 80.0,
            hit_margin: 24.0,
            speed_tiers: vec![140.0, 170.0, 200.0, 230.0, 265.0],
            max_frame_dt_ms: 50.0,
            flight_ms: 480,
            result_ms: 950,
            win_delay_ms: 1000,
            track_left: 8.0,
            track_right_gap: 12.0,
            rink_width: 480.0,
            rink_height: 340.0,
        }
    }
}

impl HockeyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.goals_to_win == 0 {
            return Err(SiteError::Config("goals_to_win must be at least 1".into()));
        }
        if self.speed_tiers.is_empty() {
            return Err(SiteError::Config("speed_tiers must not be empty".into()));
        }
        if self.speed_tiers.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(SiteError::Config("speed_tiers must be finite and non-negative".into()));
        }
        if self.net_width <= 0.0 || self.hit_margin < 0.0 {
            return Err(SiteError::Config("net_width must be positive, hit_margin non-negative".into()));
        }
        if self.max_frame_dt_ms <= 0.0 {
            return Err(SiteError::Config("max_frame_dt_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Top-level runtime configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SiteConfig {
    pub log_level: String,
    /// Element id the router renders into; created under `<body>` when absent.
    pub root_id: String,
    pub hockey: HockeyConfig,
    pub alphabet_voice: VoiceStyle,
    pub hockey_voice: VoiceStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            root_id: "app".to_string(),
            hockey: HockeyConfig::default(),
            alphabet_voice: VoiceStyle::alphabet(),
            hockey_voice: VoiceStyle::hockey(),
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_id.is_empty() {
            return Err(SiteError::Config("root_id must not be empty".into()));
        }
        self.hockey.validate()
    }
}
