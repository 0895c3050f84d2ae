//! Answer matching for guesses.
//!
//! Both sides are trimmed and lower-cased. An exact match wins outright;
//! otherwise the guess must share at least half of the answer's words.

use std::collections::HashSet;

/// How a guess compared against the active answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Exact,
    Partial,
    Miss,
}

impl MatchOutcome {
    pub fn is_correct(self) -> bool {
        !matches!(self, MatchOutcome::Miss)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchOutcome::Exact => "exact",
            MatchOutcome::Partial => "partial",
            MatchOutcome::Miss => "miss",
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare a raw guess against the stored answer.
pub fn evaluate(answer: &str, guess: &str) -> MatchOutcome {
    let answer = normalize(answer);
    let guess = normalize(guess);

    if answer == guess {
        return MatchOutcome::Exact;
    }

    // Raw piece count: repeated spaces and duplicate words still raise the bar.
    let answer_words: Vec<&str> = answer.split(' ').collect();
    let guess_words: HashSet<&str> = guess.split(' ').collect();

    let shared = answer_words
        .iter()
        .copied()
        .collect::<HashSet<&str>>()
        .intersection(&guess_words)
        .count();

    if shared > 0 && shared as f64 >= answer_words.len() as f64 / 2.0 {
        MatchOutcome::Partial
    } else {
        MatchOutcome::Miss
    }
}

pub fn is_correct(answer: &str, guess: &str) -> bool {
    evaluate(answer, guess).is_correct()
}
