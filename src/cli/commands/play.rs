//! Play command - interactive game against a strategy or yourself

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    board::{GameStatus, Player},
    cli::output,
    game::Game,
    selectors::SelectorKind,
};

/// Who controls the non-human side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One human plays both sides turn-about
    #[value(name = "self")]
    SelfPlay,
    /// The computer picks uniformly random moves
    RandomAi,
    /// The computer takes wins and blocks threats
    SimpleAi,
    /// Win/block play without fork handling (not actually perfect)
    PerfectAi,
}

impl Mode {
    fn selector_kind(self) -> Option<SelectorKind> {
        match self {
            Mode::SelfPlay => None,
            Mode::RandomAi => Some(SelectorKind::Random),
            Mode::SimpleAi => Some(SelectorKind::Simple),
            Mode::PerfectAi => Some(SelectorKind::Perfect),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Game mode: who controls the non-human side
    #[arg(value_enum)]
    pub mode: Mode,

    /// Which mark the human plays in the AI modes (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Random seed for the computer's move selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Parse an `x`/`o` token from a CLI flag
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.to_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow::anyhow!(
            "invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let mut ai = args
        .mode
        .selector_kind()
        .map(|kind| kind.into_selector(args.seed));

    println!("t4 - a tiny tic tac toe program");
    println!("-------------------------------\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    loop {
        println!("{}", output::render_board(game.state()));
        let player = game.state().to_move();

        let ai_turn;
        let position = match &mut ai {
            Some(selector) if player != human => {
                ai_turn = true;
                let position = selector.select_move(game.state())?;
                println!("{player} ({}) plays {position}", selector.name());
                position
            }
            _ => {
                ai_turn = false;
                match prompt_move(&mut input, player)? {
                    Some(position) => position,
                    None => {
                        println!("bye");
                        return Ok(());
                    }
                }
            }
        };

        match game.play(position) {
            Ok(status) if status.is_terminal() => {
                println!("{}", output::render_board(game.state()));
                announce(status);
                break;
            }
            Ok(_) => {}
            // A selector proposing an illegal move is a bug, not something
            // to retry
            Err(err) if ai_turn => return Err(err.into()),
            Err(err) => println!("{err}"),
        }
    }

    if let Some(path) = &args.export {
        game.record().save(path)?;
        println!("game exported to {}", path.display());
    }

    Ok(())
}

/// Prompt until the player types a move index. Returns `None` on `q` or
/// end of input.
fn prompt_move(input: &mut impl BufRead, player: Player) -> Result<Option<usize>> {
    loop {
        print!("{player}> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match trimmed.parse::<usize>() {
            Ok(position) => return Ok(Some(position)),
            Err(_) => println!("pick a tile by number (0-8), or q to quit"),
        }
    }
}

fn announce(status: GameStatus) {
    match status {
        GameStatus::Won(player) => println!("Player {player} won!"),
        GameStatus::Draw => println!("Draw!"),
        GameStatus::InProgress => {}
    }
}
