use crate::stats::StatsRecord;
use crate::theme::Theme;
use bulls_core::{Difficulty, Game, GameSummary, GuessError, GuessRecord};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Number of recent guesses shown above the prompt
pub const HISTORY_WINDOW: usize = 5;

/// Remaining-attempt count at or below which the player is warned
pub const LOW_ATTEMPTS_WARNING: u32 = 2;

fn line(out: &mut impl Write, color: Option<Color>, text: &str) -> io::Result<()> {
    match color {
        Some(color) => queue!(
            out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        ),
        None => writeln!(out, "{}", text),
    }
}

fn rule(out: &mut impl Write, theme: &Theme, width: usize) -> io::Result<()> {
    line(out, theme.info, &"-".repeat(width))
}

pub fn header(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    let banner = "=".repeat(60);
    writeln!(out)?;
    line(out, theme.heading, &banner)?;
    line(out, theme.heading, "ENHANCED BULLS AND COWS GAME")?;
    line(out, theme.heading, &banner)?;
    writeln!(out, "Rules:")?;
    writeln!(out, "• Bull: Correct digit in correct position")?;
    writeln!(out, "• Cow: Correct digit in wrong position")?;
    writeln!(out, "• Numbers have no repeated digits")?;
    line(out, theme.heading, &banner)
}

pub fn main_menu(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    line(out, theme.heading, "MAIN MENU")?;
    writeln!(out, "1. Play Game")?;
    writeln!(out, "2. View Statistics")?;
    writeln!(out, "3. How to Play")?;
    writeln!(out, "4. Exit")
}

pub fn difficulty_menu(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    line(out, theme.heading, "Choose Difficulty Level:")?;
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let config = difficulty.config();
        writeln!(
            out,
            "{}. {} ({} digits, {} tries)",
            i + 1,
            difficulty,
            config.digit_count,
            config.max_tries
        )?;
    }
    Ok(())
}

pub fn invalid_choice(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    line(out, theme.error, "Invalid choice. Please enter 1, 2, 3, or 4.")
}

pub fn game_start(out: &mut impl Write, theme: &Theme, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    line(
        out,
        theme.heading,
        &format!("Starting {} game!", game.difficulty().name().to_uppercase()),
    )?;
    writeln!(
        out,
        "Guess the {}-digit number with no repeated digits.",
        game.digit_count()
    )?;
    writeln!(out, "You have {} attempts. Good luck!", game.max_tries())
}

/// Attempt counter and the most recent guesses
pub fn progress(out: &mut impl Write, theme: &Theme, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    line(
        out,
        theme.info,
        &format!("Attempts: {}/{}", game.attempts(), game.max_tries()),
    )?;

    let history = game.history();
    if history.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Previous Guesses:")?;
    let skip = history.len().saturating_sub(HISTORY_WINDOW);
    for (i, record) in history.iter().enumerate().skip(skip) {
        writeln!(
            out,
            "  {}. {} -> {} bulls, {} cows",
            i + 1,
            record.guess,
            record.score.bulls,
            record.score.cows
        )?;
    }
    Ok(())
}

pub fn hint(out: &mut impl Write, theme: &Theme, digit: u8) -> io::Result<()> {
    line(
        out,
        theme.hint,
        &format!("Hint: The number contains the digit {}", digit),
    )
}

pub fn guess_error(out: &mut impl Write, theme: &Theme, error: &GuessError) -> io::Result<()> {
    line(out, theme.error, &format!("Error: {}", error))
}

/// Feedback for a guess that did not end the game
pub fn scored(
    out: &mut impl Write,
    theme: &Theme,
    record: &GuessRecord,
    remaining: u32,
) -> io::Result<()> {
    let score = record.score;
    writeln!(out, "Result: {} bulls, {} cows", score.bulls, score.cows)?;
    if score.bulls > 0 {
        line(
            out,
            theme.success,
            &format!(
                "Great! You have {} digit(s) in the right position!",
                score.bulls
            ),
        )?;
    }
    if score.cows > 0 {
        writeln!(
            out,
            "You have {} correct digit(s) in wrong position(s)!",
            score.cows
        )?;
    }
    if remaining <= LOW_ATTEMPTS_WARNING {
        line(
            out,
            theme.error,
            &format!("Warning: Only {} attempt(s) left!", remaining),
        )?;
    }
    Ok(())
}

pub fn won(out: &mut impl Write, theme: &Theme, summary: &GameSummary) -> io::Result<()> {
    writeln!(out)?;
    line(out, theme.success, "CONGRATULATIONS!")?;
    writeln!(out, "You guessed {} correctly!", summary.secret)?;
    writeln!(out, "Attempts: {}/{}", summary.attempts, summary.max_tries)?;
    writeln!(out, "Time: {:.2} seconds", summary.elapsed.as_secs_f64())?;
    writeln!(
        out,
        "Difficulty: {}",
        summary.difficulty.name().to_uppercase()
    )
}

pub fn new_best(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    line(out, theme.success, "NEW BEST SCORE!")
}

pub fn lost(out: &mut impl Write, theme: &Theme, summary: &GameSummary) -> io::Result<()> {
    writeln!(out)?;
    line(
        out,
        theme.error,
        &format!(
            "Game Over! You've used all {} attempts.",
            summary.max_tries
        ),
    )?;
    writeln!(out, "The secret number was: {}", summary.secret)
}

pub fn abandoned(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    line(out, theme.info, "Game abandoned. Thanks for playing!")
}

pub fn stats(out: &mut impl Write, theme: &Theme, stats: &StatsRecord) -> io::Result<()> {
    writeln!(out)?;
    line(out, theme.heading, "GAME STATISTICS")?;
    rule(out, theme, 30)?;
    writeln!(out, "Games Played: {}", stats.games_played)?;
    writeln!(out, "Games Won: {}", stats.games_won)?;
    if let Some(rate) = stats.win_rate() {
        writeln!(out, "Win Rate: {:.1}%", rate)?;
    }
    if let Some(best) = &stats.best_score {
        line(
            out,
            theme.success,
            &format!(
                "Best Score: {} attempts ({} difficulty)",
                best.attempts,
                best.difficulty.name()
            ),
        )?;
    }
    if let Some(avg) = stats.average_attempts() {
        writeln!(out, "Average Attempts (Won Games): {:.1}", avg)?;
    }

    if !stats.difficulty_stats.is_empty() {
        writeln!(out)?;
        writeln!(out, "By Difficulty:")?;
        for difficulty in Difficulty::ALL {
            let bucket = stats.for_difficulty(difficulty);
            if bucket.played == 0 {
                continue;
            }
            let avg = bucket
                .average_attempts()
                .map(|a| format!("{:.1}", a))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "  {}: {} played, {} won, avg attempts {}",
                difficulty, bucket.played, bucket.won, avg
            )?;
        }
    }
    rule(out, theme, 30)
}

pub fn instructions(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    line(out, theme.heading, "HOW TO PLAY BULLS AND COWS")?;
    rule(out, theme, 40)?;
    writeln!(out, "OBJECTIVE:")?;
    writeln!(out, "  Guess the secret number with no repeated digits")?;
    writeln!(out)?;
    writeln!(out, "DIFFICULTY LEVELS:")?;
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        writeln!(
            out,
            "  {}: {} digits, {} attempts",
            difficulty, config.digit_count, config.max_tries
        )?;
    }
    writeln!(out)?;
    writeln!(out, "SCORING:")?;
    writeln!(out, "  Bull: Correct digit in correct position")?;
    writeln!(out, "  Cow: Correct digit in wrong position")?;
    writeln!(out)?;
    writeln!(out, "SPECIAL COMMANDS (during game):")?;
    writeln!(out, "  'hint' - Get a helpful hint")?;
    writeln!(out, "  'stats' - View current statistics")?;
    writeln!(out, "  'quit' - Exit current game")?;
    writeln!(out)?;
    writeln!(out, "TIPS:")?;
    writeln!(out, "  • Use process of elimination")?;
    writeln!(out, "  • Pay attention to bulls vs cows")?;
    writeln!(out, "  • Try different digit combinations")?;
    writeln!(out, "  • Use hints when stuck")
}
