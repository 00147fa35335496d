use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use flotilla::{
    init_logging, Coord, FileStore, GameEvent, SessionStore, Side, StandardGame,
    COMPUTER_STEP_DELAY_MS, DEFAULT_SAVE_PATH, FLEET,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer, resuming any saved
    /// session.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,
    },
    /// Run a seeded self-play game (random human actor vs the targeting
    /// engine) and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, save } => play(seed, save),
        Commands::Sim { seed } => sim(seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(seed: Option<u64>, save: PathBuf) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut store = FileStore::new(save);

    let mut game = match store.load().as_ref().and_then(StandardGame::restore) {
        Some(game) if !game.game_over() => {
            println!("Resuming saved game.");
            game
        }
        _ => {
            println!("Starting a new game. You fire first.");
            StandardGame::new(&mut rng, &FLEET).map_err(|e| anyhow::anyhow!(e))?
        }
    };
    store.save(&game.snapshot())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.game_over() {
        match game.turn() {
            Side::Human => {
                print_boards(&game);
                print!("fire at row,col (or q to quit): ");
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    println!("\nGame saved.");
                    return Ok(());
                };
                let input = line.trim();
                if input.eq_ignore_ascii_case("q") {
                    println!("Game saved.");
                    return Ok(());
                }
                let Ok(coord) = input.parse::<Coord>() else {
                    println!("Enter a coordinate like 4,7.");
                    continue;
                };
                let events = game.fire(Side::Human, coord);
                if events.is_empty() {
                    println!("Already tried {coord}, pick another cell.");
                    continue;
                }
                report(&events);
                store.save(&game.snapshot())?;
            }
            Side::Computer => {
                while !game.game_over() && game.turn() == Side::Computer {
                    thread::sleep(Duration::from_millis(COMPUTER_STEP_DELAY_MS));
                    let events = game.computer_step(&mut rng);
                    if events.is_empty() {
                        break;
                    }
                    report(&events);
                    store.save(&game.snapshot())?;
                }
            }
        }
    }

    print_boards(&game);
    match game.winner() {
        Some(Side::Human) => println!("You win! All enemy ships destroyed."),
        Some(Side::Computer) => println!("You lose. Your fleet is gone."),
        None => {}
    }
    Ok(())
}

fn print_boards(game: &StandardGame) {
    println!("\nYour fleet:");
    print!("{}", flotilla::ui::render_own_board(game.board(Side::Human)));
    println!("Your shots:");
    print!(
        "{}",
        flotilla::ui::render_tracking_board(game.board(Side::Computer))
    );
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ShotResolved { target, coord, hit } => {
                let what = if *hit { "Hit" } else { "Miss" };
                println!("{what} at {coord} on the {target} board.");
            }
            GameEvent::TurnChanged { turn } => println!("{turn} to fire."),
            GameEvent::GameEnded { winner } => println!("Game over: {winner} wins."),
        }
    }
}

fn sim(seed: u64) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = StandardGame::new(&mut rng, &FLEET).map_err(|e| anyhow::anyhow!(e))?;

    let mut actions = 0usize;
    while !game.game_over() {
        actions += 1;
        if actions > 1000 {
            anyhow::bail!("simulation failed to terminate");
        }
        match game.turn() {
            Side::Human => {
                let open: Vec<Coord> = (!game.board(Side::Computer).shots()).iter().collect();
                if open.is_empty() {
                    anyhow::bail!("no cell left to fire at");
                }
                let coord = open[rng.random_range(0..open.len())];
                game.fire(Side::Human, coord);
            }
            Side::Computer => {
                game.run_computer_turn(&mut rng);
            }
        }
    }

    let human = game.tally(Side::Human);
    let computer = game.tally(Side::Computer);
    let result = json!({
        "seed": seed,
        "winner": game.winner().map(|w| w.to_string()),
        "human": {"hits": human.hits, "misses": human.misses},
        "computer": {"hits": computer.hits, "misses": computer.misses},
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
