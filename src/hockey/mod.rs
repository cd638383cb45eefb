//! Hockey shootout.
//!
//! A net slides back and forth across the top of the rink; the player stands
//! at the centre and shoots. The shot is judged against where the net was when
//! the button was pressed, not where it is when the puck arrives. Five goals
//! win the match and stop the net.
//!
//! ```text
//!   Idle --shoot--> ShotInFlight --flight_ms--> ResultShown --result_ms--> Idle
//!     \                                 (goal #5: DeclareWin after win_delay_ms)
//!      `-------------------------------------------------------------------> Won
//! ```
//!
//! Delays go through a [`Timers`] implementation and every cue through the
//! [`Speech`] / [`Tone`] capabilities, so the whole match can be driven by hand
//! in tests.

pub mod motion;
mod phrases;
pub mod view;

pub use motion::{NetMotion, Track, speed_for};
pub use phrases::{GOAL_PHRASES, PhrasePicker};

use tracing::{debug, info};

use crate::config::{HockeyConfig, VoiceStyle};
use crate::platform::{LoopControl, ManualTimers, Speech, Timers, Tone, ToneCue, Utterance};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ShotInFlight,
    ResultShown,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotResult {
    Goal,
    Miss,
}

/// Delayed steps of a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HockeyTimer {
    ResolveShot,
    ClearResult,
    DeclareWin,
}

/// Positions frozen at the moment of the shot.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Shot {
    actor_x: f64,
    net_x: f64,
}

/// Whether `actor_x` lines up with a net whose left edge is at `net_x`.
pub fn is_goal(actor_x: f64, net_x: f64, net_width: f64, margin: f64) -> bool {
    actor_x >= net_x - margin && actor_x <= net_x + net_width + margin
}

pub struct HockeyGame<S, T, K> {
    config: HockeyConfig,
    voice: VoiceStyle,
    rink_width: f64,
    track: Track,
    net: NetMotion,
    goals: u32,
    phase: Phase,
    result: Option<ShotResult>,
    shot: Option<Shot>,
    win_pending: bool,
    speech: S,
    tone: T,
    timers: K,
    phrases: PhrasePicker,
}

impl<S, T, K> HockeyGame<S, T, K>
where
    S: Speech,
    T: Tone,
    K: Timers<HockeyTimer>,
{
    pub fn new(config: HockeyConfig, voice: VoiceStyle, speech: S, tone: T, timers: K) -> Self {
        let rink_width = config.rink_width;
        let track = Track::for_rink(rink_width, &config);
        Self {
            net: NetMotion::new(&track),
            config,
            voice,
            rink_width,
            track,
            goals: 0,
            phase: Phase::Idle,
            result: None,
            shot: None,
            win_pending: false,
            speech,
            tone,
            timers,
            phrases: PhrasePicker::new(0x2545_f491_4f6c_dd1d),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.phrases = PhrasePicker::new(seed);
        self
    }

    /// Resize the rink; the net is pulled back onto the new track.
    pub fn set_rink_width(&mut self, width: f64) {
        self.rink_width = width;
        self.track = Track::for_rink(width, &self.config);
        self.net.x = self.track.clamp(self.net.x);
    }

    /// Per-frame update. The net freezes once the match is won.
    pub fn frame(&mut self, ts_ms: f64) -> LoopControl {
        if self.phase == Phase::Won {
            return LoopControl::Stop;
        }
        let speed = self.speed();
        self.net.frame(ts_ms, self.config.max_frame_dt_ms, speed, &self.track);
        LoopControl::Continue
    }

    /// Shoot from the player's fixed spot at the rink centre.
    pub fn shoot(&mut self) -> bool {
        self.shoot_at(self.actor_x())
    }

    /// Shoot from `actor_x`. Only accepted while idle and before the winning
    /// goal; returns whether a shot was taken.
    pub fn shoot_at(&mut self, actor_x: f64) -> bool {
        if !self.accepts_shot() {
            return false;
        }
        self.shot = Some(Shot { actor_x, net_x: self.net.x });
        // still inside the input handler; the cue itself plays from a timer
        self.tone.prime();
        self.phase = Phase::ShotInFlight;
        self.result = None;
        self.timers.after(self.config.flight_ms, HockeyTimer::ResolveShot);
        debug!(actor_x, net_x = self.net.x, "shot taken");
        true
    }

    /// Apply a fired timer. Stale timers (e.g. after a reset) are ignored.
    pub fn on_timer(&mut self, timer: HockeyTimer) {
        match timer {
            HockeyTimer::ResolveShot => self.resolve_shot(),
            HockeyTimer::ClearResult => {
                if self.phase == Phase::ResultShown {
                    self.phase = Phase::Idle;
                    self.result = None;
                }
            }
            HockeyTimer::DeclareWin => {
                if self.win_pending {
                    self.win_pending = false;
                    self.phase = Phase::Won;
                    self.result = None;
                    info!(goals = self.goals, "match won");
                }
            }
        }
    }

    fn resolve_shot(&mut self) {
        if self.phase != Phase::ShotInFlight {
            return;
        }
        let Some(shot) = self.shot.take() else { return };
        let goal = is_goal(shot.actor_x, shot.net_x, self.config.net_width, self.config.hit_margin);
        self.phase = Phase::ResultShown;

        if goal {
            self.goals += 1;
            self.result = Some(ShotResult::Goal);
            let phrase = self.phrases.pick(&GOAL_PHRASES);
            self.speech.speak(&Utterance::new(phrase, &self.voice));
            self.tone.play(&ToneCue::GOAL);
            info!(goals = self.goals, "goal");
            if self.goals >= self.config.goals_to_win {
                self.win_pending = true;
                self.timers.after(self.config.win_delay_ms, HockeyTimer::DeclareWin);
            }
        } else {
            self.result = Some(ShotResult::Miss);
            self.tone.play(&ToneCue::MISS);
            debug!("miss");
        }
        self.timers.after(self.config.result_ms, HockeyTimer::ClearResult);
    }

    /// Back to a fresh match, whatever state it was in.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.speech.cancel();
        self.goals = 0;
        self.phase = Phase::Idle;
        self.result = None;
        self.shot = None;
        self.win_pending = false;
        self.net.reset(&self.track);
        debug!("match reset");
    }

    /// Cancel everything pending; nothing may touch the match after this.
    pub fn unmount(&mut self) {
        self.timers.cancel_all();
        self.speech.cancel();
        self.net.pause();
    }

    /// Called when the frame loop pauses so the gap is not counted as motion.
    pub fn pause(&mut self) {
        self.net.pause();
    }

    pub fn actor_x(&self) -> f64 {
        self.rink_width / 2.0
    }

    pub fn speed(&self) -> f64 {
        speed_for(self.goals, &self.config.speed_tiers)
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<ShotResult> {
        self.result
    }

    /// Idle and not waiting on the win screen.
    pub fn accepts_shot(&self) -> bool {
        self.phase == Phase::Idle && !self.win_pending
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn net_x(&self) -> f64 {
        self.net.x
    }

    pub fn direction(&self) -> f64 {
        self.net.dir
    }

    /// Put the net somewhere specific (clamped to the track).
    pub fn place_net(&mut self, x: f64) {
        self.net.x = self.track.clamp(x);
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn rink_width(&self) -> f64 {
        self.rink_width
    }

    pub fn config(&self) -> &HockeyConfig {
        &self.config
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn timers(&self) -> &K {
        &self.timers
    }
}

impl<S: Speech, T: Tone> HockeyGame<S, T, ManualTimers<HockeyTimer>> {
    /// Run the virtual clock forward `ms`, firing timers in due order,
    /// including ones scheduled by earlier timers inside the window.
    pub fn advance(&mut self, ms: u64) {
        let target = self.timers.now_ms() + ms;
        while let Some(due) = self.timers.next_due().filter(|d| *d <= target) {
            let now = self.timers.now_ms();
            for timer in self.timers.advance(due.saturating_sub(now)) {
                self.on_timer(timer);
            }
        }
        let now = self.timers.now_ms();
        self.timers.advance(target.saturating_sub(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{NoSpeech, NoTone};

    type Game = HockeyGame<NoSpeech, NoTone, ManualTimers<HockeyTimer>>;

    fn game() -> Game {
        HockeyGame::new(
            HockeyConfig::default(),
            VoiceStyle::hockey(),
            NoSpeech,
            NoTone,
            ManualTimers::new(),
        )
    }

    fn aligned(g: &mut Game) {
        let centre = g.actor_x();
        g.place_net(centre - g.config().net_width / 2.0);
    }

    #[test]
    fn hit_window_is_inclusive() {
        assert!(is_goal(100.0, 100.0, 80.0, 24.0));
        assert!(is_goal(76.0, 100.0, 80.0, 24.0));
        assert!(is_goal(204.0, 100.0, 80.0, 24.0));
        assert!(!is_goal(75.9, 100.0, 80.0, 24.0));
        assert!(!is_goal(204.1, 100.0, 80.0, 24.0));
    }

    #[test]
    fn phases_follow_the_timeline() {
        let mut g = game();
        aligned(&mut g);
        assert!(g.shoot());
        assert_eq!(g.phase(), Phase::ShotInFlight);
        g.advance(479);
        assert_eq!(g.phase(), Phase::ShotInFlight);
        g.advance(1);
        assert_eq!(g.phase(), Phase::ResultShown);
        assert_eq!(g.result(), Some(ShotResult::Goal));
        g.advance(950);
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.result(), None);
        assert_eq!(g.goals(), 1);
    }

    #[test]
    fn shot_uses_net_position_at_press_time() {
        let mut g = game();
        aligned(&mut g);
        assert!(g.shoot());
        // net runs away while the puck is in the air
        g.place_net(g.track().max);
        g.advance(480);
        assert_eq!(g.result(), Some(ShotResult::Goal));
    }

    #[test]
    fn stale_timers_after_reset_are_ignored() {
        let mut g = game();
        aligned(&mut g);
        g.shoot();
        g.on_timer(HockeyTimer::DeclareWin);
        g.reset();
        g.on_timer(HockeyTimer::ResolveShot);
        g.on_timer(HockeyTimer::ClearResult);
        assert_eq!(g.goals(), 0);
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.timers().pending(), 0);
    }

    #[test]
    fn speed_rises_with_goals() {
        let mut g = game();
        assert_eq!(g.speed(), 140.0);
        aligned(&mut g);
        g.shoot();
        g.advance(2000);
        assert_eq!(g.speed(), 170.0);
    }

    #[test]
    fn resize_keeps_net_on_track() {
        let mut g = game();
        g.place_net(g.track().max);
        g.set_rink_width(200.0);
        assert_eq!(g.net_x(), 200.0 - 80.0 - 12.0);
        assert_eq!(g.actor_x(), 100.0);
    }
}
