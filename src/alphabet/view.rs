//! DOM binding for the alphabet page: a tile grid, a popup card and a
//! completion screen, all re-rendered from `AlphabetGame` after every input.

use std::cell::RefCell;

use tracing::info;
use web_sys::{Element, KeyboardEvent};
use wasm_bindgen::JsCast;

use super::AlphabetGame;
use crate::config::VoiceStyle;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::pages::escape;
use crate::platform::Speech;
use crate::platform::web::WebSpeech;

struct AlphabetPage {
    root: Element,
    game: AlphabetGame<WebSpeech>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static ALPHABET: RefCell<Option<AlphabetPage>> = const { RefCell::new(None) };
}

fn with_page(f: impl FnOnce(&mut AlphabetPage)) {
    ALPHABET.with(|cell| {
        if let Some(page) = cell.borrow_mut().as_mut() {
            f(page);
            page.root.set_inner_html(&render_html(&page.game));
        }
    });
}

pub fn mount(root: &Element, voice: &VoiceStyle) -> Result<()> {
    unmount();
    let game = AlphabetGame::new(WebSpeech::new(), voice.clone());
    root.set_inner_html(&render_html(&game));

    let clicks = Listener::new(root, "click", |evt| {
        let Some((action, el)) = dom::action_of(&evt) else { return };
        with_page(|page| match action.as_str() {
            "select" => {
                let letter = el.get_attribute("data-letter").and_then(|s| s.chars().next());
                if let Some(letter) = letter {
                    page.game.select(letter);
                }
            }
            "dismiss" => {
                page.game.dismiss();
            }
            "repeat" => page.game.repeat(),
            "reset" => page.game.reset(),
            _ => {}
        });
    })?;

    let win = dom::win()?;
    let keys = Listener::new(&win, "keydown", |evt| {
        let Some(key_evt) = evt.dyn_ref::<KeyboardEvent>() else { return };
        if key_evt.ctrl_key() || key_evt.meta_key() || key_evt.alt_key() {
            return;
        }
        let key = key_evt.key();
        with_page(|page| {
            if page.game.handle_key(&key) {
                evt.prevent_default();
            }
        });
    })?;

    ALPHABET.with(|cell| {
        cell.replace(Some(AlphabetPage {
            root: root.clone(),
            game,
            _listeners: vec![clicks, keys],
        }));
    });
    info!("alphabet mounted");
    Ok(())
}

/// Drop the page: speech stops and listeners are removed.
pub fn unmount() {
    let page = ALPHABET.with(|cell| cell.borrow_mut().take());
    if let Some(mut page) = page {
        page.game.unmount();
        info!("alphabet unmounted");
    }
}

/// Markup for the current game state.
pub fn render_html<S: Speech>(game: &AlphabetGame<S>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<section class="alphabet">"#);
    html.push_str(r#"<a href="/kids" data-route="/kids" class="back">← Games</a>"#);

    if game.is_complete() {
        html.push_str(&format!(
            r#"<div class="done"><div class="big">🎉</div><h1>You did it!</h1><p>All {} letters cleared!</p><button data-action="reset">Play again</button></div>"#,
            game.total()
        ));
        html.push_str("</section>");
        return html;
    }

    html.push_str(&format!(
        r#"<header><div><p class="eyebrow">Kids Games</p><h1>Alphabet</h1></div><div class="score"><p>Cleared</p><p class="count">{}<span> / {}</span></p></div></header>"#,
        game.cleared(),
        game.total()
    ));
    html.push_str("<p>Tap a letter, or press it on your keyboard!</p>");
    html.push_str(r#"<div class="letter-grid">"#);
    for card in game.catalog() {
        if game.is_remaining(card.letter) {
            html.push_str(&format!(
                r#"<button class="tile" data-action="select" data-letter="{l}" style="background:linear-gradient(135deg,{a},{b})">{l}</button>"#,
                l = card.letter,
                a = card.colors.0,
                b = card.colors.1
            ));
        } else {
            html.push_str(r#"<div class="tile cleared">✓</div>"#);
        }
    }
    html.push_str("</div>");

    if let Some(card) = game.selected_card() {
        html.push_str(&format!(
            r#"<div class="overlay" data-action="dismiss"><div class="card" data-action="card" style="background:linear-gradient(135deg,{a},{b})"><div class="emoji">{e}</div><div class="letter">{l}</div><div class="word">{w}</div><p>{l} is for {w}</p><button data-action="repeat">🔊 Say it again</button><button data-action="dismiss" class="close">tap anywhere to close</button></div></div>"#,
            a = card.colors.0,
            b = card.colors.1,
            e = card.emoji,
            l = card.letter,
            w = escape(card.word)
        ));
    }
    html.push_str("</section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::NoSpeech;

    fn game() -> AlphabetGame<NoSpeech> {
        AlphabetGame::new(NoSpeech, VoiceStyle::alphabet())
    }

    #[test]
    fn fresh_board_has_every_tile() {
        let html = render_html(&game());
        assert_eq!(html.matches(r#"data-action="select""#).count(), 26);
        assert!(html.contains("0<span> / 26</span>"));
        assert!(!html.contains("overlay"));
    }

    #[test]
    fn open_card_and_cleared_tile_render() {
        let mut g = game();
        g.select('B');
        g.dismiss();
        g.select('I');
        let html = render_html(&g);
        assert_eq!(html.matches("tile cleared").count(), 1);
        assert!(html.contains("I is for Ice Cream"));
        assert!(html.contains(r#"data-action="repeat""#));
    }

    #[test]
    fn completion_screen_offers_reset() {
        let mut g = game();
        for c in 'A'..='Z' {
            g.select(c);
            g.dismiss();
        }
        let html = render_html(&g);
        assert!(html.contains("All 26 letters cleared!"));
        assert!(html.contains(r#"data-action="reset""#));
        assert!(!html.contains("letter-grid"));
    }
}
