mod app;
mod console;
mod render;
mod stats;
mod theme;

use app::{App, AppError};
use bulls_core::Generator;
use clap::Parser;
use console::TerminalConsole;
use stats::StatsStore;
use std::any::Any;
use std::io::{self, IsTerminal};
use std::panic;
use theme::Theme;

/// Bulls and Cows: guess the secret number with no repeated digits
#[derive(Parser, Debug)]
#[command(name = "bulls", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Panics are reported once below, without a backtrace
    panic::set_hook(Box::new(|info| log::error!("{}", info)));

    let message = match panic::catch_unwind(run) {
        Ok(Ok(())) => return,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };
    println!("An error occurred: {}", message);
    println!("Please try running the game again.");
}

fn run() -> Result<(), AppError> {
    let stdout = io::stdout();
    let theme = if stdout.is_terminal() {
        Theme::dark()
    } else {
        Theme::plain()
    };

    let mut app = App::new(
        TerminalConsole::new(),
        stdout,
        theme,
        StatsStore::default(),
        Generator::new(),
    );
    app.run()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected internal error".to_string()
    }
}
