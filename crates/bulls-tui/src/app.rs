use crate::console::{Console, Input};
use crate::render;
use crate::stats::{StatsRecord, StatsStore};
use crate::theme::Theme;
use bulls_core::{Difficulty, Game, Generator, TurnOutcome};
use std::io::{self, Write};
use thiserror::Error;

/// Failures that end the program
#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The main application state
pub struct App<C: Console, W: Write> {
    console: C,
    out: W,
    theme: Theme,
    /// Secret and hint randomness
    generator: Generator,
    store: StatsStore,
    /// Statistics, loaded at startup and saved after every finished game
    stats: StatsRecord,
}

impl<C: Console, W: Write> App<C, W> {
    pub fn new(console: C, out: W, theme: Theme, store: StatsStore, generator: Generator) -> Self {
        let stats = store.load();
        log::debug!(
            "loaded stats from {}: {} played, {} won",
            store.path().display(),
            stats.games_played,
            stats.games_won
        );
        Self {
            console,
            out,
            theme,
            generator,
            store,
            stats,
        }
    }

    /// Main menu loop; returns when the player exits
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            render::header(&mut self.out, &self.theme)?;
            render::main_menu(&mut self.out, &self.theme)?;

            let choice = match self.prompt("\nEnter your choice (1-4): ")? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    writeln!(self.out, "\nGoodbye!")?;
                    break;
                }
            };

            let flow = match choice.trim() {
                "1" => self.play_game()?,
                "2" => {
                    render::stats(&mut self.out, &self.theme, &self.stats)?;
                    Flow::Continue
                }
                "3" => {
                    render::instructions(&mut self.out, &self.theme)?;
                    Flow::Continue
                }
                "4" => {
                    writeln!(self.out, "\nThanks for playing Bulls and Cows! Goodbye!")?;
                    break;
                }
                _ => {
                    render::invalid_choice(&mut self.out, &self.theme)?;
                    continue;
                }
            };

            if flow == Flow::Exit {
                break;
            }
            if self.prompt("\nPress Enter to continue...")? == Input::Interrupted {
                writeln!(self.out, "\nGoodbye!")?;
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Choose a difficulty and play one game with a fresh secret
    pub fn play_game(&mut self) -> AppResult<Flow> {
        let Some(difficulty) = self.choose_difficulty()? else {
            return Ok(Flow::Exit);
        };
        let game = Game::new(difficulty, &mut self.generator);
        self.run_game(game)
    }

    /// `None` means the player interrupted and the whole session ends
    fn choose_difficulty(&mut self) -> AppResult<Option<Difficulty>> {
        render::difficulty_menu(&mut self.out, &self.theme)?;
        loop {
            match self.prompt("\nEnter your choice (1-4): ")? {
                Input::Line(line) => match Difficulty::from_menu_choice(&line) {
                    Some(difficulty) => return Ok(Some(difficulty)),
                    None => render::invalid_choice(&mut self.out, &self.theme)?,
                },
                Input::Interrupted => {
                    writeln!(self.out, "\nGame interrupted. Goodbye!")?;
                    return Ok(None);
                }
            }
        }
    }

    /// Turn loop for one game, through to a terminal state
    pub fn run_game(&mut self, mut game: Game) -> AppResult<Flow> {
        render::game_start(&mut self.out, &self.theme, &game)?;

        while game.is_playing() {
            render::progress(&mut self.out, &self.theme, &game)?;

            if game.auto_hint_due() {
                if let Some(digit) = game.hint(&mut self.generator) {
                    render::hint(&mut self.out, &self.theme, digit)?;
                }
            }

            let prompt = format!("\nEnter your {}-digit guess: ", game.digit_count());
            let input = match self.prompt(&prompt)? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    game.abandon();
                    writeln!(self.out, "\nGame interrupted. Goodbye!")?;
                    break;
                }
            };

            match game.submit(&input, &mut self.generator) {
                TurnOutcome::Abandoned => render::abandoned(&mut self.out, &self.theme)?,
                TurnOutcome::Hint(Some(digit)) => render::hint(&mut self.out, &self.theme, digit)?,
                TurnOutcome::Hint(None) => {}
                TurnOutcome::ShowStats => render::stats(&mut self.out, &self.theme, &self.stats)?,
                TurnOutcome::Invalid(e) => render::guess_error(&mut self.out, &self.theme, &e)?,
                TurnOutcome::Scored(record) => {
                    render::scored(&mut self.out, &self.theme, &record, game.remaining())?
                }
                TurnOutcome::Won(summary) => {
                    render::won(&mut self.out, &self.theme, &summary)?;
                    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
                    if self.stats.record_win(&summary, &today) {
                        render::new_best(&mut self.out, &self.theme)?;
                    }
                    self.store.save(&self.stats);
                }
                TurnOutcome::Lost { record, summary } => {
                    render::scored(&mut self.out, &self.theme, &record, game.remaining())?;
                    render::lost(&mut self.out, &self.theme, &summary)?;
                    self.stats.record_loss(&summary);
                    self.store.save(&self.stats);
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> AppResult<Input> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(self.console.read_line()?)
    }
}
