//! Othello engine CLI
//!
//! Plays one AI vs AI game and prints every move.
//!
//! Usage: `othello [black-difficulty] [white-difficulty] [config.toml]`
//! (difficulties default to `medium`).

use std::env;
use std::process;

use othello::{
    AiPlayer, Board, Color, Difficulty, EngineConfig, GameOutcome, GameSession, Result,
    SearchEngine, Turn,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let black: Difficulty = args.first().map_or(Ok(Difficulty::Medium), |s| s.parse())?;
    let white: Difficulty = args.get(1).map_or(Ok(Difficulty::Medium), |s| s.parse())?;
    let config = match args.get(2) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = SearchEngine::with_config(config)?;

    println!("===========================================");
    println!("       Othello Engine v0.1.0");
    println!("===========================================\n");
    println!(
        "Black: {black} (depth {})  White: {white} (depth {})\n",
        engine.depth_for(black),
        engine.depth_for(white)
    );

    let start = Board::new();
    let mut session = GameSession::new(
        Box::new(AiPlayer::new(Color::Black, &start, black, engine.clone())?),
        Box::new(AiPlayer::new(Color::White, &start, white, engine)?),
    )?;
    println!("{}", session.board());

    let mut ply = 0;
    loop {
        let color = session.to_move();
        let Some(turn) = session.step()? else {
            break;
        };
        ply += 1;
        match turn {
            Turn::Played(pos) => {
                let (own, opp) = session.board().score(color);
                println!("--- Move {ply}: {color} plays {pos} ({own}-{opp}) ---");
                println!("{}", session.board());
            }
            Turn::Passed => println!("--- Move {ply}: {color} passes ---\n"),
        }
    }

    let (black_discs, white_discs) = session.board().score(Color::Black);
    println!("===========================================");
    match session.outcome() {
        GameOutcome::BlackWins => println!("  Black wins {black_discs}-{white_discs}"),
        GameOutcome::WhiteWins => println!("  White wins {white_discs}-{black_discs}"),
        GameOutcome::Draw => println!("  Draw {black_discs}-{white_discs}"),
        GameOutcome::InProgress => println!("  Game interrupted"),
    }
    println!("===========================================");
    Ok(())
}
