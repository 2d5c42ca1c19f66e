//! CLI blackjack example.
//!
//! Runs the request/response boundary in-process against a memory store.
//! Set `RUST_LOG=bjgame=debug` to see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjgame::{Action, Game, GameOptions, GameRequest, GameService, GameStatus, MemoryStore, Player};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let service = GameService::new(MemoryStore::new(), GameOptions::default(), seed);

    loop {
        let mut game = match service.handle(Action::Start, &GameRequest::default()) {
            Ok(response) => response.game,
            Err(err) => {
                println!("Start error: {} ({})", err.message, err.status);
                return;
            }
        };
        let request = GameRequest::for_game(game.id().to_string());

        while game.status() == GameStatus::InPlay {
            print_table(&game, false);

            let action = match prompt_line("Action ([h]it, [s]tand): ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match service.handle(action, &request) {
                Ok(response) => game = response.game,
                Err(err) => {
                    println!("Action error: {} ({})", err.message, err.status);
                    break;
                }
            }
        }

        print_table(&game, true);
        match game.winner() {
            Some(winner) => println!("Result: {winner:?}"),
            None => println!("Game abandoned."),
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn print_table(game: &Game, reveal_dealer: bool) {
    println!();
    println!("Game {} ({} cards left)", game.id(), game.cards_remaining());
    if reveal_dealer {
        println!("{}", format_side(game.dealer()));
    } else {
        let up = game
            .dealer()
            .hand()
            .first()
            .map_or_else(String::new, ToString::to_string);
        println!("{}: {up}, [hidden]", game.dealer().name());
    }
    println!("{}", format_side(game.player()));
}

fn format_side(side: &Player) -> String {
    let cards: Vec<String> = side.hand().iter().map(ToString::to_string).collect();
    let bust = if side.is_bust() { " BUST" } else { "" };
    format!("{}: {} = {}{bust}", side.name(), cards.join(", "), side.score())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
