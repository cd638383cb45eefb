//! Alphabet flashcard game.
//!
//! The player taps (or types) a letter, hears "A! A is for Apple!", and closes
//! the card. Closing clears the letter; the round is over when every letter in
//! the catalog has been cleared.

mod letters;
pub mod view;

pub use letters::{LETTERS, LetterCard, lookup};

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::config::VoiceStyle;
use crate::platform::{Speech, Utterance};

pub struct AlphabetGame<S: Speech> {
    catalog: &'static [LetterCard],
    remaining: BTreeSet<char>,
    selected: Option<char>,
    speech: S,
    voice: VoiceStyle,
}

impl<S: Speech> AlphabetGame<S> {
    pub fn new(speech: S, voice: VoiceStyle) -> Self {
        Self::with_catalog(&LETTERS, speech, voice)
    }

    pub fn with_catalog(catalog: &'static [LetterCard], speech: S, voice: VoiceStyle) -> Self {
        Self {
            catalog,
            remaining: catalog.iter().map(|c| c.letter).collect(),
            selected: None,
            speech,
            voice,
        }
    }

    /// Open `letter`'s card and say it. Ignored for cleared or unknown letters and
    /// while another card is open. Returns whether the card opened.
    pub fn select(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if self.selected.is_some() || !self.remaining.contains(&letter) {
            return false;
        }
        self.selected = Some(letter);
        self.say_selected();
        debug!(%letter, "card opened");
        true
    }

    /// Close the open card and clear its letter. Returns the cleared letter.
    pub fn dismiss(&mut self) -> Option<char> {
        let letter = self.selected.take()?;
        self.speech.cancel();
        self.remaining.remove(&letter);
        debug!(%letter, left = self.remaining.len(), "letter cleared");
        if self.is_complete() {
            info!(cleared = self.cleared(), "alphabet complete");
        }
        Some(letter)
    }

    /// Start over with every letter back on the board.
    pub fn reset(&mut self) {
        self.speech.cancel();
        self.remaining = self.catalog.iter().map(|c| c.letter).collect();
        self.selected = None;
    }

    /// Say the open card again.
    pub fn repeat(&mut self) {
        self.say_selected();
    }

    /// Keyboard mirror: a letter key selects while no card is open, Escape
    /// closes the open card. Returns whether the key did anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            return self.dismiss().is_some();
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => self.select(c),
            _ => false,
        }
    }

    /// Stop any speech; called when the page goes away.
    pub fn unmount(&mut self) {
        self.speech.cancel();
    }

    pub fn phrase(card: &LetterCard) -> String {
        format!("{l}! {l} is for {w}!", l = card.letter, w = card.word)
    }

    fn say_selected(&mut self) {
        let Some(card) = self.selected_card() else { return };
        let utterance = Utterance::new(Self::phrase(card), &self.voice);
        // speak() replaces whatever is playing
        self.speech.cancel();
        self.speech.speak(&utterance);
    }

    pub fn selected(&self) -> Option<char> {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&'static LetterCard> {
        let letter = self.selected?;
        self.catalog.iter().find(|c| c.letter == letter)
    }

    pub fn is_remaining(&self, letter: char) -> bool {
        self.remaining.contains(&letter.to_ascii_uppercase())
    }

    pub fn remaining(&self) -> &BTreeSet<char> {
        &self.remaining
    }

    pub fn catalog(&self) -> &'static [LetterCard] {
        self.catalog
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn cleared(&self) -> usize {
        self.catalog.len() - self.remaining.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::NoSpeech;

    #[derive(Default)]
    struct Recorder {
        spoken: Vec<String>,
        cancels: usize,
    }

    impl Speech for Recorder {
        fn speak(&mut self, u: &Utterance) {
            self.spoken.push(u.text.clone());
        }
        fn cancel(&mut self) {
            self.cancels += 1;
        }
        fn available(&self) -> bool {
            true
        }
    }

    fn game() -> AlphabetGame<Recorder> {
        AlphabetGame::new(Recorder::default(), VoiceStyle::alphabet())
    }

    #[test]
    fn select_speaks_letter_and_word() {
        let mut g = game();
        assert!(g.select('c'));
        assert_eq!(g.selected(), Some('C'));
        assert_eq!(g.speech().spoken, vec!["C! C is for Cat!".to_string()]);
    }

    #[test]
    fn second_select_while_open_is_ignored() {
        let mut g = game();
        assert!(g.select('A'));
        assert!(!g.select('B'));
        assert_eq!(g.selected(), Some('A'));
        assert_eq!(g.speech().spoken.len(), 1);
    }

    #[test]
    fn cleared_letter_cannot_be_reselected() {
        let mut g = game();
        g.select('A');
        assert_eq!(g.dismiss(), Some('A'));
        assert!(!g.select('A'));
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn dismiss_without_selection_is_noop() {
        let mut g = game();
        assert_eq!(g.dismiss(), None);
        assert_eq!(g.cleared(), 0);
    }

    #[test]
    fn dismiss_cancels_speech() {
        let mut g = game();
        g.select('Z');
        let before = g.speech().cancels;
        g.dismiss();
        assert_eq!(g.speech().cancels, before + 1);
    }

    #[test]
    fn keyboard_mirror() {
        let mut g = game();
        assert!(!g.handle_key("Escape"));
        assert!(g.handle_key("m"));
        assert!(!g.handle_key("n"), "letter keys are ignored while a card is open");
        assert!(!g.handle_key("Shift"));
        assert!(g.handle_key("Escape"));
        assert!(!g.is_remaining('M'));
        assert!(!g.handle_key("7"));
    }

    #[test]
    fn repeat_speaks_open_card_again() {
        let mut g = game();
        g.repeat();
        assert!(g.speech().spoken.is_empty());
        g.select('L');
        g.repeat();
        assert_eq!(g.speech().spoken, vec!["L! L is for Lion!"; 2]);
    }

    #[test]
    fn works_without_speech_engine() {
        let mut g = AlphabetGame::new(NoSpeech, VoiceStyle::alphabet());
        assert!(g.select('Q'));
        assert_eq!(g.dismiss(), Some('Q'));
        assert_eq!(g.cleared(), 1);
    }
}
