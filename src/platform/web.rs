//! Browser implementations of the platform traits.
//!
//! Each one degrades to a no-op when the underlying facility is missing (no
//! window, no `speechSynthesis`, `AudioContext` construction refused). Failures
//! are logged at `warn` and never surface to the games.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AudioContext, OscillatorType, SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice,
    window,
};

use super::{
    CancelToken, FrameLoop, LoopControl, Speech, Timers, Tone, ToneCue, Utterance, VoiceInfo, Wave,
    choose_voice,
};

/// `performance.now()` in milliseconds, or 0 outside a browser window.
pub fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Seed for non-cryptographic choices (goal phrases).
pub fn random_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_ok() {
            return u64::from_le_bytes(bytes);
        }
    }
    (performance_now() * 1000.0) as u64
}

// --- Speech ------------------------------------------------------------------

pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            warn!("speechSynthesis unavailable, spoken cues disabled");
        }
        Self { synth }
    }

    fn pick_voice(synth: &SpeechSynthesis, utterance: &Utterance) -> Option<SpeechSynthesisVoice> {
        let voices: Vec<SpeechSynthesisVoice> = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let infos: Vec<VoiceInfo> = voices
            .iter()
            .map(|v| VoiceInfo { name: v.name(), lang: v.lang() })
            .collect();
        let style = &utterance.style;
        choose_voice(&infos, &style.voice_hints, &style.lang).and_then(|i| voices.get(i).cloned())
    }
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl Speech for WebSpeech {
    fn speak(&mut self, utterance: &Utterance) {
        let Some(synth) = &self.synth else { return };
        synth.cancel();
        let utt = match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(u) => u,
            Err(e) => {
                warn!(error = ?e, "could not build utterance");
                return;
            }
        };
        utt.set_rate(utterance.style.rate);
        utt.set_pitch(utterance.style.pitch);
        utt.set_lang(&utterance.style.lang);
        if let Some(voice) = Self::pick_voice(synth, utterance) {
            utt.set_voice(Some(&voice));
        }
        debug!(text = %utterance.text, "speak");
        synth.speak(&utt);
    }

    fn cancel(&mut self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn available(&self) -> bool {
        self.synth.is_some()
    }
}

// --- Tones -------------------------------------------------------------------

/// Web Audio oscillator cues. Cues play from timer callbacks, outside any user
/// gesture, so the context has to be created and resumed earlier through
/// `prime`, which the game calls while handling the shot input.
#[derive(Default)]
pub struct WebTone {
    ctx: Option<AudioContext>,
    disabled: bool,
}

impl WebTone {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new()?);
        }
        self.ctx.as_ref().ok_or_else(|| JsValue::from_str("no audio context"))
    }

    fn try_play(&mut self, cue: &ToneCue) -> Result<(), JsValue> {
        let ctx = self.context()?;
        // no-op once running; a context that is still suspended stays silent
        let _ = ctx.resume();

        let now = ctx.current_time();
        let end = now + cue.duration_ms as f64 / 1000.0;

        let osc = ctx.create_oscillator()?;
        osc.set_type(match cue.wave {
            Wave::Sine => OscillatorType::Sine,
            Wave::Square => OscillatorType::Square,
            Wave::Triangle => OscillatorType::Triangle,
        });
        let freq = osc.frequency();
        freq.set_value_at_time(cue.start_hz, now)?;
        freq.exponential_ramp_to_value_at_time(cue.end_hz, end)?;

        // exponential ramps cannot touch 0
        let gain = ctx.create_gain()?;
        let g = gain.gain();
        g.set_value_at_time(0.0001, now)?;
        g.exponential_ramp_to_value_at_time(cue.peak_gain, now + 0.02)?;
        g.exponential_ramp_to_value_at_time(0.0001, end)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start()?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}

impl Tone for WebTone {
    fn prime(&mut self) {
        if self.disabled {
            return;
        }
        let primed = self.context().map(|ctx| {
            let _ = ctx.resume();
        });
        if let Err(e) = primed {
            warn!(error = ?e, "AudioContext unavailable, disabling audio cues");
            self.disabled = true;
        }
    }

    fn play(&mut self, cue: &ToneCue) {
        if self.disabled {
            return;
        }
        if let Err(e) = self.try_play(cue) {
            warn!(error = ?e, "tone playback failed, disabling audio cues");
            self.disabled = true;
        }
    }
}

// --- Timers ------------------------------------------------------------------

type LiveTimers = Rc<RefCell<HashMap<u64, (i32, Closure<dyn FnMut()>)>>>;

/// `setTimeout`-backed timers. A fired task is passed to `dispatch`, which is
/// expected to route it back to the owning page.
pub struct WindowTimers<T: 'static> {
    dispatch: Rc<dyn Fn(T)>,
    live: LiveTimers,
    next_token: u64,
}

impl<T: 'static> WindowTimers<T> {
    pub fn new(dispatch: impl Fn(T) + 'static) -> Self {
        Self { dispatch: Rc::new(dispatch), live: Rc::default(), next_token: 1 }
    }
}

impl<T: 'static> Timers<T> for WindowTimers<T> {
    fn after(&mut self, delay_ms: u32, task: T) -> CancelToken {
        let token = CancelToken(self.next_token);
        self.next_token += 1;
        let Some(win) = window() else {
            warn!("no window, timer dropped");
            return token;
        };

        let live = Rc::downgrade(&self.live);
        let dispatch = self.dispatch.clone();
        let mut task = Some(task);
        let cb = Closure::wrap(Box::new(move || {
            // Move our state out, then release the entry before dispatching:
            // the handler may schedule more timers.
            let fired = task.take();
            let dispatch = dispatch.clone();
            if let Some(map) = live.upgrade() {
                let entry = map.borrow_mut().remove(&token.0);
                drop(entry);
            }
            if let Some(task) = fired {
                dispatch(task);
            }
        }) as Box<dyn FnMut()>);

        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => {
                self.live.borrow_mut().insert(token.0, (handle, cb));
            }
            Err(e) => warn!(error = ?e, "setTimeout failed"),
        }
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        let entry = self.live.borrow_mut().remove(&token.0);
        if let (Some((handle, _cb)), Some(win)) = (entry, window()) {
            win.clear_timeout_with_handle(handle);
        }
    }

    fn cancel_all(&mut self) {
        let drained: Vec<_> = self.live.borrow_mut().drain().collect();
        if let Some(win) = window() {
            for (_, (handle, _cb)) in drained {
                win.clear_timeout_with_handle(handle);
            }
        }
    }

    fn pending(&self) -> usize {
        self.live.borrow().len()
    }
}

impl<T: 'static> Drop for WindowTimers<T> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

// --- Animation frames ---------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. `on_frame` gets the frame timestamp and decides
/// whether another frame is requested.
pub struct RafLoop {
    on_frame: Rc<dyn Fn(f64) -> LoopControl>,
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl RafLoop {
    pub fn new(on_frame: impl Fn(f64) -> LoopControl + 'static) -> Self {
        Self {
            on_frame: Rc::new(on_frame),
            running: Rc::new(Cell::new(false)),
            handle: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
        }
    }
}

fn request_frame(cb: &FrameCallback, handle: &Cell<Option<i32>>) {
    let Some(w) = window() else { return };
    if let Some(c) = cb.borrow().as_ref() {
        match w.request_animation_frame(c.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => warn!(error = ?e, "requestAnimationFrame failed"),
        }
    }
}

impl FrameLoop for RafLoop {
    fn start(&mut self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);

        let f = self.callback.clone();
        let on_frame = self.on_frame.clone();
        let running = self.running.clone();
        let handle = self.handle.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle.set(None);
            if !running.get() {
                return;
            }
            if on_frame(ts) == LoopControl::Stop {
                running.set(false);
                return;
            }
            if running.get() {
                request_frame(&f, &handle);
            }
        }) as Box<dyn FnMut(f64)>));
        request_frame(&self.callback, &self.handle);
    }

    fn stop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // Break the closure's self-reference so it can be freed.
        let cb = self.callback.borrow_mut().take();
        drop(cb);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
