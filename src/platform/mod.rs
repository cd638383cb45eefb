//! Platform capabilities the games depend on.
//!
//! Every browser facility the games touch (speech, audio, timers, animation
//! frames) sits behind one of these traits. The games only ever talk to the
//! traits, so the state machines run unchanged under `cargo test` with the
//! no-op and manual implementations below. The browser versions live in [`web`].

pub mod timers;
pub mod web;

pub use timers::ManualTimers;

use crate::config::VoiceStyle;

/// Handle returned by every scheduling call; cancelling a stale token is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelToken(pub u64);

/// Text plus the voice parameters to speak it with.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub style: VoiceStyle,
}

impl Utterance {
    pub fn new(text: impl Into<String>, style: &VoiceStyle) -> Self {
        Self { text: text.into(), style: style.clone() }
    }
}

/// Fire-and-forget speech output. At most one utterance plays at a time:
/// `speak` cuts off whatever is currently playing.
pub trait Speech {
    fn speak(&mut self, utterance: &Utterance);
    fn cancel(&mut self);
    fn available(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
}

/// A single synthesized blip: frequency slides from `start_hz` to `end_hz` while
/// gain attacks to `peak_gain` and decays to silence over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneCue {
    pub start_hz: f32,
    pub end_hz: f32,
    pub peak_gain: f32,
    pub duration_ms: u32,
    pub wave: Wave,
}

impl ToneCue {
    pub const GOAL: ToneCue = ToneCue {
        start_hz: 520.0,
        end_hz: 1040.0,
        peak_gain: 0.25,
        duration_ms: 420,
        wave: Wave::Triangle,
    };
    pub const MISS: ToneCue = ToneCue {
        start_hz: 220.0,
        end_hz: 110.0,
        peak_gain: 0.18,
        duration_ms: 320,
        wave: Wave::Square,
    };
}

/// Fire-and-forget tone synthesis. Overlapping cues are allowed.
pub trait Tone {
    fn play(&mut self, cue: &ToneCue);

    /// Called from inside a user gesture ahead of a delayed `play`, for
    /// backends that may only unlock audio while the gesture is active.
    fn prime(&mut self) {}
}

/// Delayed callbacks carrying a task value `T`. How a fired task reaches its
/// owner is up to the implementation.
pub trait Timers<T> {
    fn after(&mut self, delay_ms: u32, task: T) -> CancelToken;
    fn cancel(&mut self, token: CancelToken);
    fn cancel_all(&mut self);
    fn pending(&self) -> usize;
}

/// Returned by a frame handler to keep or end its loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// A repeating per-frame callback. Both calls are idempotent.
pub trait FrameLoop {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Speech for contexts without a speech engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpeech;

impl Speech for NoSpeech {
    fn speak(&mut self, _utterance: &Utterance) {}
    fn cancel(&mut self) {}
    fn available(&self) -> bool {
        false
    }
}

/// Tone output for contexts without Web Audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTone;

impl Tone for NoTone {
    fn play(&mut self, _cue: &ToneCue) {}
}

/// Frame loop that is never driven; callers feed frames by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualFrames {
    running: bool,
}

impl FrameLoop for ManualFrames {
    fn start(&mut self) {
        self.running = true;
    }
    fn stop(&mut self) {
        self.running = false;
    }
    fn is_running(&self) -> bool {
        self.running
    }
}

/// Name and language of an installed voice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

/// Pick a voice for `lang`. Hints are tried in order against voices speaking
/// `lang` exactly; failing that, the first voice sharing the primary language
/// subtag wins. `None` leaves the engine default in place.
pub fn choose_voice(voices: &[VoiceInfo], hints: &[String], lang: &str) -> Option<usize> {
    let same_lang = |v: &VoiceInfo| v.lang.replace('_', "-").eq_ignore_ascii_case(lang);
    for hint in hints {
        if let Some(idx) = voices.iter().position(|v| same_lang(v) && v.name.contains(hint.as_str())) {
            return Some(idx);
        }
    }
    let primary = primary_subtag(lang);
    voices
        .iter()
        .position(|v| primary_subtag(&v.lang).eq_ignore_ascii_case(primary))
}

fn primary_subtag(lang: &str) -> &str {
    lang.split(['-', '_']).next().unwrap_or(lang)
}
