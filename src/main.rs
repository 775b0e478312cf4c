//! Tic-tac-toe AI command line
//!
//! Headless front end: AI self-play and move suggestions.

mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use tictactoe::{AIEngine, Board, GameSession, Outcome, PlayerKind, Settings};

fn main() -> tictactoe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Command::Selfplay { grid, rounds } => {
            grid.apply_to(&mut settings);
            settings.player_x = PlayerKind::Ai;
            settings.player_o = PlayerKind::Ai;
            selfplay(settings, rounds)
        }
        Command::Suggest { board, mark, grid } => {
            let board = cli::board_for_suggest(&board, &grid, &mut settings)?;
            suggest(&settings, &board, mark)
        }
    }
}

fn selfplay(settings: Settings, rounds: u32) -> tictactoe::Result<()> {
    let mut engine = AIEngine::from_settings(&settings);
    let mut game = GameSession::new(settings)?;

    info!(
        width = game.board().width(),
        height = game.board().height(),
        win_length = game.board().win_length(),
        rounds,
        "starting self-play"
    );

    for round in 1..=rounds {
        if round > 1 {
            game.next_round();
        }
        println!("--- Round {round}: {} opens ---", game.starting_mark());

        while !game.is_over() {
            game.play_ai(&mut engine)?;
        }

        println!("{}", game.board());
        match game.outcome() {
            Outcome::Win(mark) => println!("Winner: {mark}"),
            _ => println!("Draw"),
        }
        if let Some(line) = game.winning_line() {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            println!("Line: {}", cells.join(" "));
        }
    }

    let tally = game.tally();
    println!(
        "\nX wins: {}  O wins: {}  Draws: {}",
        tally.x_wins, tally.o_wins, tally.draws
    );
    Ok(())
}

fn suggest(settings: &Settings, board: &Board, mark: tictactoe::Mark) -> tictactoe::Result<()> {
    let mut engine = AIEngine::from_settings(settings);
    let result = engine.get_move_with_stats(board, mark);

    println!("{board}");
    match result.best_move {
        Some(pos) => println!("{mark} plays {pos}"),
        None => println!("No move available"),
    }
    println!("Score: {}", result.score);
    println!("Depth: {}", result.depth);
    println!("Nodes: {}", result.stats.nodes);
    println!("Time: {}ms", result.time_ms);
    Ok(())
}
