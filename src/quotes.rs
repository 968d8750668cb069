//! Quote Picker
//!
//! Stateless uniform selection from a fixed set of quotes. Nothing here is
//! persisted; repeats between picks are allowed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// An attributed quote
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// Quote text wrapped in quotation marks
    pub fn quoted_text(&self) -> String {
        format!("\"{}\"", self.text)
    }

    /// Attribution line
    pub fn attribution(&self) -> String {
        format!("- {}", self.author)
    }
}

/// The built-in quote set
pub static QUOTES: [Quote; 10] = [
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Innovation distinguishes between a leader and a follower.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Life is what happens to you while you're busy making other plans.",
        author: "John Lennon",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "It is during our darkest moments that we must focus to see the light.",
        author: "Aristotle",
    },
    Quote {
        text: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        text: "Don't be afraid to give up the good to go for the great.",
        author: "John D. Rockefeller",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "The only impossible journey is the one you never begin.",
        author: "Tony Robbins",
    },
    Quote {
        text: "In the middle of difficulty lies opportunity.",
        author: "Albert Einstein",
    },
];

/// Picks quotes from [`QUOTES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotePicker;

impl QuotePicker {
    pub fn new() -> Self {
        Self
    }

    /// Pick one quote using the thread-local RNG
    pub fn pick(&self) -> &'static Quote {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Pick one quote using the given RNG
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static Quote {
        // QUOTES is never empty
        QUOTES.choose(rng).unwrap_or(&QUOTES[0])
    }

    /// All quotes in the set
    pub fn all(&self) -> &'static [Quote] {
        &QUOTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_set_of_ten() {
        let picker = QuotePicker::new();
        assert_eq!(picker.all().len(), 10);
        assert!(picker
            .all()
            .iter()
            .all(|q| !q.text.is_empty() && !q.author.is_empty()));
    }

    #[test]
    fn test_pick_is_from_set() {
        let picker = QuotePicker::new();
        for _ in 0..50 {
            let quote = picker.pick();
            assert!(QUOTES.contains(quote));
        }
    }

    #[test]
    fn test_seeded_picks_are_reproducible() {
        let picker = QuotePicker::new();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(picker.pick_with(&mut a), picker.pick_with(&mut b));
        }
    }

    #[test]
    fn test_picks_cover_the_set() {
        let picker = QuotePicker::new();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<&str> = (0..1000)
            .map(|_| picker.pick_with(&mut rng).text)
            .collect();
        assert_eq!(seen.len(), QUOTES.len());
    }

    #[test]
    fn test_display_lines() {
        let quote = &QUOTES[9];
        assert_eq!(
            quote.quoted_text(),
            "\"In the middle of difficulty lies opportunity.\""
        );
        assert_eq!(quote.attribution(), "- Albert Einstein");
    }
}
