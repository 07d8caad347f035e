use chessmate::{Game, GreedyCaptureAgent, HumanAgent, SlowAgent, Team};
use std::io::{stdout, Write};
use text_io::read;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------
// Main
// ---------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("chessmate");
    println!("  1) play against the engine (you are White)");
    println!("  2) watch the engine play itself");
    println!("  3) two players at one terminal");

    let winner = match read_choice() {
        1 => Game::new(HumanAgent::new(), GreedyCaptureAgent::new()).play(),
        2 => Game::new(
            SlowAgent::new(GreedyCaptureAgent::new(), 500),
            SlowAgent::new(GreedyCaptureAgent::new(), 500),
        )
        .play(),
        _ => Game::new(HumanAgent::new(), HumanAgent::new()).play(),
    };

    match winner {
        Team::White => println!("White takes the game."),
        Team::Black => println!("Black takes the game."),
    }
}

fn read_choice() -> u8 {
    loop {
        print!("> ");
        stdout().flush().unwrap();
        let input: String = read!();
        match input.parse() {
            Ok(n @ 1..=3) => return n,
            _ => println!("Please answer 1, 2 or 3."),
        }
    }
}
