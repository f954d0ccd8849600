//! Sim command - pit two strategies against each other over many games

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{GameStatus, Player},
    cli::output,
    game::Game,
    selectors::{MoveSelector, SelectorKind},
};

#[derive(Parser, Debug)]
#[command(about = "Pit two strategies against each other")]
pub struct SimArgs {
    /// Strategy playing X
    #[arg(long, value_enum, default_value = "simple")]
    pub x_strategy: SelectorKind,

    /// Strategy playing O
    #[arg(long, value_enum, default_value = "random")]
    pub o_strategy: SelectorKind,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SimArgs) -> Result<()> {
    if args.games == 0 {
        println!("no games requested");
        return Ok(());
    }

    // The two sides get distinct seed streams
    let mut x = args.x_strategy.into_selector(args.seed);
    let mut o = args
        .o_strategy
        .into_selector(args.seed.map(|seed| seed.wrapping_add(1)));

    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..args.games {
        match play_one(x.as_mut(), o.as_mut())? {
            Some(Player::X) => x_wins += 1,
            Some(Player::O) => o_wins += 1,
            None => draws += 1,
        }
    }

    let percent = |count: usize| 100.0 * count as f64 / args.games as f64;

    output::print_section("Simulation Results");
    println!("Games: {}", args.games);
    println!("X ({}) wins: {} ({:.1}%)", x.name(), x_wins, percent(x_wins));
    println!("O ({}) wins: {} ({:.1}%)", o.name(), o_wins, percent(o_wins));
    println!("Draws: {} ({:.1}%)", draws, percent(draws));

    Ok(())
}

/// Play a single game to the end; `None` means a draw
fn play_one<'a>(x: &'a mut dyn MoveSelector, o: &'a mut dyn MoveSelector) -> crate::Result<Option<Player>> {
    let mut game = Game::new();

    loop {
        let selector = match game.state().to_move() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = selector.select_move(game.state())?;

        match game.play(position)? {
            GameStatus::Won(player) => return Ok(Some(player)),
            GameStatus::Draw => return Ok(None),
            GameStatus::InProgress => {}
        }
    }
}
