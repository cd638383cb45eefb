// Native integration tests for the alphabet game. Speech is either absent
// (`NoSpeech`) or recorded, so everything here runs under plain `cargo test`.

use std::collections::BTreeSet;

use sellberg_site::alphabet::{AlphabetGame, LETTERS};
use sellberg_site::config::VoiceStyle;
use sellberg_site::platform::{NoSpeech, Speech, Utterance};

#[derive(Default)]
struct Recording {
    spoken: Vec<String>,
    cancels: usize,
    playing: bool,
}

impl Speech for Recording {
    fn speak(&mut self, u: &Utterance) {
        assert!(!self.playing, "utterance started over another one");
        self.playing = true;
        self.spoken.push(u.text.clone());
    }
    fn cancel(&mut self) {
        self.playing = false;
        self.cancels += 1;
    }
    fn available(&self) -> bool {
        true
    }
}

fn silent() -> AlphabetGame<NoSpeech> {
    AlphabetGame::new(NoSpeech, VoiceStyle::alphabet())
}

fn all_letters() -> BTreeSet<char> {
    LETTERS.iter().map(|c| c.letter).collect()
}

#[test]
fn select_then_dismiss_removes_exactly_that_letter() {
    for card in LETTERS.iter() {
        let mut g = silent();
        assert!(g.select(card.letter));
        assert_eq!(g.dismiss(), Some(card.letter));
        let mut expected = all_letters();
        expected.remove(&card.letter);
        assert_eq!(g.remaining(), &expected, "clearing {} touched other letters", card.letter);
    }
}

#[test]
fn clearing_every_letter_completes_the_round() {
    let mut g = silent();
    assert_eq!(g.total(), 26);
    // reverse order: completion must not depend on the order letters are cleared in
    for card in LETTERS.iter().rev() {
        assert!(!g.is_complete());
        g.select(card.letter);
        g.dismiss();
    }
    assert!(g.is_complete());
    assert_eq!(g.cleared(), 26);
    assert!(g.remaining().is_empty());
}

#[test]
fn reset_restores_full_catalog_from_any_state() {
    let mut g = silent();
    g.reset();
    assert_eq!(g.remaining(), &all_letters());

    for c in ['Q', 'U', 'I', 'E', 'T'] {
        g.select(c);
        g.dismiss();
    }
    g.select('Z');
    g.reset();
    assert_eq!(g.remaining(), &all_letters());
    assert_eq!(g.selected(), None);

    for c in 'A'..='Z' {
        g.select(c);
        g.dismiss();
    }
    assert!(g.is_complete());
    g.reset();
    assert_eq!(g.cleared(), 0);
}

#[test]
fn cleared_or_blocked_selects_are_ignored() {
    let mut g = silent();
    g.select('M');
    g.dismiss();
    assert!(!g.select('M'), "cleared letter reopened");

    assert!(g.select('N'));
    assert!(!g.select('O'), "second card opened over the first");
    assert_eq!(g.selected(), Some('N'));
    assert!(g.is_remaining('O'));
}

#[test]
fn dismiss_without_open_card_is_a_no_op() {
    let mut g = silent();
    assert_eq!(g.dismiss(), None);
    assert_eq!(g.cleared(), 0);
}

#[test]
fn keyboard_mirrors_taps() {
    let mut g = silent();
    assert!(g.handle_key("k"));
    assert_eq!(g.selected(), Some('K'));
    assert!(!g.handle_key("j"), "letter key accepted while a card is open");
    assert!(g.handle_key("Escape"));
    assert!(!g.is_remaining('K'));
    assert!(!g.handle_key("Shift"));
    assert!(!g.handle_key("7"));
    assert!(!g.handle_key("Escape"));
}

#[test]
fn speech_says_letter_and_word_one_at_a_time() {
    let mut g = AlphabetGame::new(Recording::default(), VoiceStyle::alphabet());
    g.select('D');
    g.repeat();
    g.dismiss();
    g.select('E');
    let spoken = &g.speech().spoken;
    assert_eq!(spoken.len(), 3);
    assert!(spoken[0].starts_with("D! D is for "));
    assert_eq!(spoken[0], spoken[1]);
    assert!(spoken[2].starts_with("E! E is for "));
    assert!(g.speech().cancels >= 3);
}

#[test]
fn missing_speech_does_not_change_state_transitions() {
    let mut silent_game = silent();
    let mut voiced = AlphabetGame::new(Recording::default(), VoiceStyle::alphabet());
    for key in ["a", "Escape", "b", "c", "Escape", "a", "z", "Escape"] {
        assert_eq!(silent_game.handle_key(key), voiced.handle_key(key), "diverged on {key}");
    }
    assert_eq!(silent_game.remaining(), voiced.remaining());
    assert!(!silent_game.speech().available());
}
