// Alphabet flashcard catalog: one word, pictogram and card gradient per letter.

/// A single flashcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterCard {
    pub letter: char,
    pub word: &'static str,
    pub emoji: &'static str,
    /// Gradient stops (from, to) used for the tile and the popup.
    pub colors: (&'static str, &'static str),
}

const fn card(
    letter: char,
    word: &'static str,
    emoji: &'static str,
    from: &'static str,
    to: &'static str,
) -> LetterCard {
    LetterCard { letter, word, emoji, colors: (from, to) }
}

pub const LETTERS: [LetterCard; 26] = [
    card('A', "Apple", "🍎", "#f87171", "#f43f5e"),
    card('B', "Ball", "⚽", "#60a5fa", "#6366f1"),
    card('C', "Cat", "🐱", "#fb923c", "#f59e0b"),
    card('D', "Dog", "🐶", "#facc15", "#f97316"),
    card('E', "Elephant", "🐘", "#9ca3af", "#64748b"),
    card('F', "Fish", "🐟", "#22d3ee", "#3b82f6"),
    card('G', "Grapes", "🍇", "#c084fc", "#8b5cf6"),
    card('H', "Hat", "🎩", "#94a3b8", "#4b5563"),
    card('I', "Ice Cream", "🍦", "#f9a8d4", "#fb7185"),
    card('J', "Juice", "🧃", "#fde047", "#a3e635"),
    card('K', "Kite", "🪁", "#38bdf8", "#3b82f6"),
    card('L', "Lion", "🦁", "#facc15", "#f59e0b"),
    card('M', "Moon", "🌙", "#818cf8", "#a855f7"),
    card('N', "Night", "🌃", "#2563eb", "#4338ca"),
    card('O', "Orange", "🍊", "#fb923c", "#fbbf24"),
    card('P', "Pizza", "🍕", "#fca5a5", "#fb923c"),
    card('Q', "Queen", "👑", "#facc15", "#f59e0b"),
    card('R', "Rainbow", "🌈", "#f472b6", "#a855f7"),
    card('S', "Star", "⭐", "#fde047", "#fb923c"),
    card('T', "Tiger", "🐯", "#fb923c", "#ef4444"),
    card('U', "Umbrella", "☂️", "#2dd4bf", "#06b6d4"),
    card('V', "Volcano", "🌋", "#ef4444", "#ea580c"),
    card('W', "Whale", "🐋", "#60a5fa", "#06b6d4"),
    card('X', "Xylophone", "🎵", "#f472b6", "#f43f5e"),
    card('Y', "Yarn", "🧶", "#f9a8d4", "#e879f9"),
    card('Z', "Zebra", "🦓", "#9ca3af", "#52525b"),
];

/// Look up a card by letter, case-insensitively.
pub fn lookup(letter: char) -> Option<&'static LetterCard> {
    let upper = letter.to_ascii_uppercase();
    LETTERS.iter().find(|c| c.letter == upper)
}
