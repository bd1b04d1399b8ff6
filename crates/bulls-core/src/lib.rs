//! Bulls and Cows engine: secret generation, guess validation, scoring, hint
//! policy and the per-game state machine. No I/O happens here.

mod code;
mod difficulty;
mod generator;
pub mod hint;
mod scorer;
mod session;
mod validator;

pub use code::{digit_range, digits_of, has_unique_digits, Code, MAX_DIGITS};
pub use difficulty::{Difficulty, DifficultyConfig};
pub use generator::Generator;
pub use scorer::{score, score_digits, Score};
pub use session::{Game, GameState, GameSummary, GuessRecord, TurnInput, TurnOutcome};
pub use validator::{validate, GuessError};
