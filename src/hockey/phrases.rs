// Goal celebration lines and the picker that chooses between them.

pub const GOAL_PHRASES: [&str; 5] = [
    "Goal! Bradley scores!",
    "Score! Great shot Bradley!",
    "Yes! Goal!",
    "He shoots, he scores!",
    "Bradley scores again!",
];

/// Cheap linear congruential picker; not for anything that needs real randomness.
#[derive(Clone, Debug)]
pub struct PhrasePicker {
    state: u64,
}

impl PhrasePicker {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn pick<'a>(&mut self, phrases: &[&'a str]) -> &'a str {
        if phrases.is_empty() {
            return "";
        }
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // high bits of an LCG are the well-mixed ones
        let idx = (self.state >> 33) as usize % phrases.len();
        phrases[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_come_from_the_list() {
        let mut p = PhrasePicker::new(42);
        for _ in 0..50 {
            assert!(GOAL_PHRASES.contains(&p.pick(&GOAL_PHRASES)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PhrasePicker::new(7);
        let mut b = PhrasePicker::new(7);
        for _ in 0..10 {
            assert_eq!(a.pick(&GOAL_PHRASES), b.pick(&GOAL_PHRASES));
        }
    }

    #[test]
    fn empty_list_yields_empty_phrase() {
        assert_eq!(PhrasePicker::new(1).pick(&[]), "");
    }
}
