//! Domain layer: pure game types and rules, no I/O.

pub mod animal;
pub mod difficulty;
pub mod hints;
pub mod matching;
pub mod verdict;

pub use animal::AnimalRecord;
pub use difficulty::Difficulty;
pub use hints::Hints;
pub use matching::MatchOutcome;
pub use verdict::GuessVerdict;
