//! Browser binding for the hockey page.
//!
//! The page chrome (score, shoot button, win panel) is plain DOM built once and
//! patched when the match state changes; the rink itself is a canvas redrawn on
//! every animation frame.

use std::cell::RefCell;

use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, KeyboardEvent};

use super::{HockeyGame, HockeyTimer, Phase, ShotResult};
use crate::config::{HockeyConfig, VoiceStyle};
use crate::dom::{self, Listener};
use crate::error::{Result, SiteError};
use crate::platform::web::{RafLoop, WebSpeech, WebTone, WindowTimers, performance_now, random_seed};
use crate::platform::{FrameLoop, LoopControl};

type WebHockey = HockeyGame<WebSpeech, WebTone, WindowTimers<HockeyTimer>>;

struct HockeyPage {
    root: Element,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: WebHockey,
    frames: RafLoop,
    shot_started_ms: Option<f64>,
    shown: Option<(u32, Phase, Option<ShotResult>, bool)>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static HOCKEY: RefCell<Option<HockeyPage>> = const { RefCell::new(None) };
}

fn with_page(f: impl FnOnce(&mut HockeyPage)) {
    HOCKEY.with(|cell| {
        if let Some(page) = cell.borrow_mut().as_mut() {
            f(page);
            page.sync_chrome();
        }
    });
}

pub fn mount(root: &Element, config: &HockeyConfig, voice: &VoiceStyle) -> Result<()> {
    unmount();
    root.set_inner_html(&render_skeleton(config));

    let canvas: HtmlCanvasElement = root
        .query_selector("#hk-rink")?
        .ok_or(SiteError::MissingElement("hk-rink"))?
        .dyn_into()
        .map_err(|_| SiteError::MissingElement("hk-rink"))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(SiteError::Js("no 2d context".into()))?
        .dyn_into()
        .map_err(|_| SiteError::Js("2d context has unexpected type".into()))?;

    let timers = WindowTimers::new(|timer: HockeyTimer| {
        with_page(|page| {
            page.game.on_timer(timer);
            if timer == HockeyTimer::ResolveShot {
                page.shot_started_ms = None;
            }
        });
    });
    let mut game = HockeyGame::new(config.clone(), voice.clone(), WebSpeech::new(), WebTone::new(), timers)
        .with_seed(random_seed());
    let width = fit_width(root, config);
    game.set_rink_width(width);
    canvas.set_width(width as u32);
    canvas.set_height(config.rink_height as u32);

    let frames = RafLoop::new(|ts| {
        HOCKEY.with(|cell| match cell.borrow_mut().as_mut() {
            Some(page) => page.on_frame(ts),
            None => LoopControl::Stop,
        })
    });

    let clicks = Listener::new(root, "click", |evt| {
        let Some((action, _)) = dom::action_of(&evt) else { return };
        with_page(|page| match action.as_str() {
            "shoot" => page.shoot(),
            "reset" => page.restart(),
            _ => {}
        });
    })?;

    let win = dom::win()?;
    let keys = Listener::new(&win, "keydown", |evt| {
        let Some(key_evt) = evt.dyn_ref::<KeyboardEvent>() else { return };
        // a focused link keeps Enter/Space for itself
        if dom::from_link(&evt) {
            return;
        }
        let key = key_evt.key();
        with_page(|page| match key.as_str() {
            " " | "Enter" => {
                evt.prevent_default();
                page.shoot();
            }
            "r" | "R" if page.game.is_won() => page.restart(),
            _ => {}
        });
    })?;

    let resize = Listener::new(&win, "resize", |_| {
        with_page(|page| {
            let width = fit_width(&page.root, page.game.config());
            page.game.set_rink_width(width);
            page.canvas.set_width(width as u32);
        });
    })?;

    let mut page = HockeyPage {
        root: root.clone(),
        canvas,
        ctx,
        game,
        frames,
        shot_started_ms: None,
        shown: None,
        _listeners: vec![clicks, keys, resize],
    };
    page.sync_chrome();
    // the first frame arrives asynchronously, after the page is in place
    page.frames.start();
    HOCKEY.with(|cell| {
        cell.replace(Some(page));
    });
    info!("hockey mounted");
    Ok(())
}

/// Stop the frame loop, cancel pending shot timers and speech, drop listeners.
pub fn unmount() {
    let page = HOCKEY.with(|cell| cell.borrow_mut().take());
    if let Some(mut page) = page {
        page.frames.stop();
        page.game.unmount();
        info!("hockey unmounted");
    }
}

fn fit_width(root: &Element, config: &HockeyConfig) -> f64 {
    let avail = root.client_width() as f64;
    if avail > 0.0 { avail.min(config.rink_width) } else { config.rink_width }
}

impl HockeyPage {
    fn shoot(&mut self) {
        if self.game.shoot() {
            self.shot_started_ms = Some(performance_now());
        }
    }

    fn restart(&mut self) {
        self.game.reset();
        self.shot_started_ms = None;
        self.frames.start();
        debug!("hockey restarted");
    }

    fn on_frame(&mut self, ts: f64) -> LoopControl {
        let control = self.game.frame(ts);
        self.draw(ts);
        self.sync_chrome();
        if control == LoopControl::Stop {
            self.game.pause();
        }
        control
    }

    fn sync_chrome(&mut self) {
        let key = (self.game.goals(), self.game.phase(), self.game.result(), self.game.accepts_shot());
        if self.shown == Some(key) {
            return;
        }
        self.shown = Some(key);
        let goals = self.game.goals();
        let tiers = self.game.config().speed_tiers.len() as u32;
        let won = self.game.is_won();

        set_text(&self.root, "#hk-goals", &goals.to_string());
        let speed_note = match goals {
            0 => "",
            g if g + 1 >= tiers => "🔥 Max speed!",
            _ => "Getting faster!",
        };
        set_text(&self.root, "#hk-speed", speed_note);

        if let Ok(Some(btn)) = self.root.query_selector("#hk-shoot") {
            if self.game.accepts_shot() {
                let _ = btn.remove_attribute("disabled");
                btn.set_text_content(Some("🏒  SHOOT!"));
            } else {
                let _ = btn.set_attribute("disabled", "");
                btn.set_text_content(Some("..."));
            }
        }
        set_display(&self.root, "#hk-board", !won);
        set_display(&self.root, "#hk-won", won);
    }

    fn draw(&self, now: f64) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        ctx.set_fill_style_str("#18181b");
        ctx.fill_rect(0.0, 0.0, w, h);

        // faint rink markings
        ctx.set_stroke_style_str("rgba(147,197,253,0.12)");
        ctx.set_line_width(1.0);
        line(ctx, 0.0, h / 2.0, w, h / 2.0);
        ctx.begin_path();
        let _ = ctx.arc(w / 2.0, h / 2.0, 48.0, 0.0, std::f64::consts::TAU);
        ctx.stroke();

        // aim line
        let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(6.0));
        let _ = ctx.set_line_dash(&dash);
        ctx.set_stroke_style_str("rgba(255,255,255,0.10)");
        line(ctx, w / 2.0, 0.0, w / 2.0, h);
        let _ = ctx.set_line_dash(&js_sys::Array::new());

        ctx.set_text_baseline("top");
        ctx.set_text_align("left");
        ctx.set_font("60px serif");
        let _ = ctx.fill_text("🥅", self.game.net_x(), 16.0);

        ctx.set_text_align("center");
        ctx.set_font("24px serif");
        match (self.game.phase(), self.shot_started_ms) {
            (Phase::ShotInFlight, Some(start)) => {
                let flight = self.game.config().flight_ms.max(1) as f64;
                let t = ((now - start) / flight).clamp(0.0, 1.0);
                // ease-in
                let y = h * 0.78 - (h * 0.60) * t * t;
                let _ = ctx.fill_text("⚫", w / 2.0, y);
            }
            (Phase::ResultShown, _) => {
                let _ = ctx.fill_text("⚫", w / 2.0, h * 0.18);
            }
            _ => {}
        }

        ctx.set_font("48px serif");
        let _ = ctx.fill_text("🧍", w / 2.0, h - 64.0);

        if let Some(result) = self.game.result() {
            let (text, color) = match result {
                ShotResult::Goal => ("🚨 GOAL!", "#4ade80"),
                ShotResult::Miss => ("😬 Miss!", "#f87171"),
            };
            ctx.set_text_baseline("middle");
            ctx.set_font("bold 44px sans-serif");
            ctx.set_fill_style_str(color);
            let _ = ctx.fill_text(text, w / 2.0, h / 2.0);
        }
    }
}

fn set_text(root: &Element, selector: &str, text: &str) {
    if let Ok(Some(el)) = root.query_selector(selector) {
        el.set_text_content(Some(text));
    }
}

fn set_display(root: &Element, selector: &str, visible: bool) {
    if let Ok(Some(el)) = root.query_selector(selector) {
        let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Static markup for the page; dynamic parts are filled in by `sync_chrome`.
pub fn render_skeleton(config: &HockeyConfig) -> String {
    format!(
        concat!(
            r#"<section class="hockey">"#,
            r#"<a href="/kids" data-route="/kids" class="back">← Games</a>"#,
            r#"<div id="hk-board">"#,
            r#"<header><div><p class="eyebrow">Hockey</p><h1>Score the<br>Goal!</h1></div>"#,
            r#"<div class="score"><p>Goals</p><p class="count"><span id="hk-goals">0</span><span>/{goal}</span></p><p id="hk-speed"></p></div></header>"#,
            r#"<canvas id="hk-rink" width="{w}" height="{h}"></canvas>"#,
            r#"<button id="hk-shoot" data-action="shoot">🏒  SHOOT!</button>"#,
            r#"<p class="hint">Time your shot, hit the net!</p>"#,
            r#"</div>"#,
            r#"<div id="hk-won" style="display:none"><div class="big">🏆</div><h1>{goal} GOALS!</h1>"#,
            r#"<p>Bradley wins!</p><p>He shoots, he scores!</p><button data-action="reset">Play again</button></div>"#,
            r#"</section>"#
        ),
        goal = config.goals_to_win,
        w = config.rink_width as u32,
        h = config.rink_height as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_every_patched_element() {
        let html = render_skeleton(&HockeyConfig::default());
        for id in ["hk-board", "hk-goals", "hk-speed", "hk-rink", "hk-shoot", "hk-won"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert!(html.contains("/5</span>"));
        assert!(html.contains("5 GOALS!"));
        assert!(html.contains(r#"width="480" height="340""#));
    }
}
