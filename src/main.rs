use anyhow::{Context, Result};
use hangman::cli::{Cli, LineReader, TerminalScreen, parse_cli};
use hangman::logging::{default_log_path, init_file_logger};
use hangman::tui::{KeyReader, TuiScreen};
use hangman::{FrameSink, GameReport, NullSink, Outcome, frequency_guesser, hangman_game};
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path) {
        if let Err(e) = init_file_logger(&path) {
            eprintln!("Logging disabled, cannot open '{}': {e}", path.display());
        }
    }

    let report = play(&cli)?;
    if cli.quiet {
        print_report(&report);
    }
    Ok(())
}

fn play(cli: &Cli) -> Result<GameReport> {
    let config = cli.game_config();

    if cli.tui {
        let mut screen = TuiScreen::new(config.frame_delay).context("failed to start the TUI")?;
        let report = if cli.auto {
            hangman_game(&config, &mut frequency_guesser(), &mut screen)
        } else {
            hangman_game(&config, &mut KeyReader::new(), &mut screen)
        };
        let report = report.context("game aborted")?;
        screen.wait_for_key()?;
        return Ok(report);
    }

    let mut screen: Box<dyn FrameSink> = if config.interactive {
        Box::new(TerminalScreen::stdout(config.frame_delay))
    } else {
        Box::new(NullSink)
    };
    let report = if cli.auto {
        hangman_game(&config, &mut frequency_guesser(), screen.as_mut())
    } else {
        let mut reader = LineReader::with_prompt(io::stdin().lock(), io::stdout());
        hangman_game(&config, &mut reader, screen.as_mut())
    };
    report.context("game aborted")
}

fn print_report(report: &GameReport) {
    let outcome = match report.outcome {
        Outcome::Won => "won",
        Outcome::Lost => "lost",
        Outcome::Quit => "quit",
    };
    println!(
        "{outcome} {} wrong={} tried={}",
        report.word,
        report.wrong_guesses,
        report.tried.iter().collect::<String>()
    );
}
