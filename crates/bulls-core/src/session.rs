use crate::code::Code;
use crate::difficulty::Difficulty;
use crate::generator::Generator;
use crate::hint;
use crate::scorer::{score, Score};
use crate::validator::{validate, GuessError};
use std::time::{Duration, Instant};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub score: Score,
}

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    Abandoned,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// A line of player input, classified before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInput<'a> {
    Quit,
    Hint,
    Stats,
    Guess(&'a str),
}

impl<'a> TurnInput<'a> {
    pub fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            TurnInput::Quit
        } else if trimmed.eq_ignore_ascii_case("hint") {
            TurnInput::Hint
        } else if trimmed.eq_ignore_ascii_case("stats") {
            TurnInput::Stats
        } else {
            TurnInput::Guess(trimmed)
        }
    }
}

/// Final facts about a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub secret: Code,
    pub attempts: u32,
    pub max_tries: u32,
    pub elapsed: Duration,
}

/// What happened as a result of one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Player quit; nothing is recorded
    Abandoned,
    /// Hint routine ran; `None` when hints are not yet available
    Hint(Option<u8>),
    /// Player asked to see statistics
    ShowStats,
    /// Input rejected; no attempt consumed
    Invalid(GuessError),
    /// Guess scored and the game goes on
    Scored(GuessRecord),
    Won(GameSummary),
    /// Final guess scored without a win; the record is still shown
    Lost {
        record: GuessRecord,
        summary: GameSummary,
    },
}

/// A single game from the first prompt to a terminal state
#[derive(Debug, Clone)]
pub struct Game {
    /// Difficulty level
    difficulty: Difficulty,
    /// The number to guess
    secret: Code,
    /// Scored guesses so far
    attempts: u32,
    /// Every scored guess, oldest first
    history: Vec<GuessRecord>,
    /// Start time
    start_time: Instant,
    /// Frozen once the game ends
    elapsed: Option<Duration>,
    state: GameState,
}

impl Game {
    /// Start a game with a freshly generated secret
    pub fn new(difficulty: Difficulty, generator: &mut Generator) -> Self {
        let secret = generator.generate(difficulty.digit_count());
        Self::with_secret(difficulty, secret)
    }

    /// Start a game with a known secret
    pub fn with_secret(difficulty: Difficulty, secret: Code) -> Self {
        debug_assert_eq!(secret.len(), difficulty.digit_count());
        Self {
            difficulty,
            secret,
            attempts: 0,
            history: Vec::new(),
            start_time: Instant::now(),
            elapsed: None,
            state: GameState::Playing,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn digit_count(&self) -> usize {
        self.difficulty.digit_count()
    }

    pub fn max_tries(&self) -> u32 {
        self.difficulty.max_tries()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_tries().saturating_sub(self.attempts)
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Whether the automatic hint should run before the next prompt
    pub fn auto_hint_due(&self) -> bool {
        self.is_playing() && hint::auto_hint_due(self.attempts, self.max_tries())
    }

    /// Run the hint routine
    pub fn hint(&self, generator: &mut Generator) -> Option<u8> {
        hint::reveal_digit(&self.secret, self.attempts, self.max_tries(), generator)
    }

    /// Mark the game abandoned, e.g. on interrupt
    pub fn abandon(&mut self) {
        if self.is_playing() {
            self.finish(GameState::Abandoned);
        }
    }

    /// Apply one line of player input
    pub fn submit(&mut self, input: &str, generator: &mut Generator) -> TurnOutcome {
        debug_assert!(self.is_playing(), "submit after game over");

        match TurnInput::parse(input) {
            TurnInput::Quit => {
                self.finish(GameState::Abandoned);
                TurnOutcome::Abandoned
            }
            TurnInput::Hint => TurnOutcome::Hint(self.hint(generator)),
            TurnInput::Stats => TurnOutcome::ShowStats,
            TurnInput::Guess(raw) => match validate(raw, self.digit_count()) {
                Ok(guess) => self.record_guess(guess),
                Err(e) => TurnOutcome::Invalid(e),
            },
        }
    }

    fn record_guess(&mut self, guess: Code) -> TurnOutcome {
        self.attempts += 1;
        let score = score(&self.secret, &guess);
        let record = GuessRecord { guess, score };
        self.history.push(record.clone());

        if score.is_win(self.digit_count()) {
            self.finish(GameState::Won);
            TurnOutcome::Won(self.summary())
        } else if self.attempts >= self.max_tries() {
            self.finish(GameState::Lost);
            TurnOutcome::Lost {
                record,
                summary: self.summary(),
            }
        } else {
            TurnOutcome::Scored(record)
        }
    }

    fn finish(&mut self, state: GameState) {
        self.elapsed = Some(self.start_time.elapsed());
        self.state = state;
        log::debug!(
            "{} game ended {:?} after {} attempts",
            self.difficulty.name(),
            state,
            self.attempts
        );
    }

    fn summary(&self) -> GameSummary {
        GameSummary {
            difficulty: self.difficulty,
            secret: self.secret.clone(),
            attempts: self.attempts,
            max_tries: self.max_tries(),
            elapsed: self.elapsed(),
        }
    }
}
