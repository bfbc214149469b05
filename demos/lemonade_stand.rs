//! Lemonade Stand
//!
//! A terminal front-end for the game. Press Enter to tap the picture,
//! `q` then Enter to quit.
//!
//! Options (see `--help`):
//! - `--seed <n>`: reproducible squeeze counts
//! - `--config <path>`: TOML game configuration
//!
//! Logging is controlled by `LEMONADE_LOG_FORMAT` and `LEMONADE_LOG_LEVEL`.
//!
//! Run with: cargo run --example lemonade_stand -- --seed 42

use clap::Parser;
use lemonade::resources::{StepResources, APP_TITLE};
use lemonade::{BundledResources, GameBuilder, GameConfig, GameState, Step};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;

fn art(step: Step) -> &'static str {
    match step {
        Step::Tree => {
            r"
      .-~~~-.
    .( o  o  ).
   (  o   o   o)
    `-.__|__.-'
         |
        /|\
"
        }
        Step::Lemon => {
            r"
      _______
    /  .   .  \
   |  .  .  .  |
    \ ._____. /
"
        }
        Step::Drink => {
            r"
    |~~~~~~~|
    |~~~~~~~|
    |~~~~~~~|
    \_______/
"
        }
        Step::Done => {
            r"
    |       |
    |       |
    |       |
    \_______/
"
        }
    }
}

fn render(state: GameState, glasses: usize) {
    let resources = BundledResources;
    let image = resources.image_for(state.step());
    let cta = resources.cta_text_for(state.step());

    println!("\n==================== {APP_TITLE} ====================");
    println!("{}", art(state.step()));
    println!("  [{}]", image.description);
    match state.squeezes_remaining() {
        Some(left) => println!("  {} ({left} to go)", cta.text),
        None => println!("  {}", cta.text),
    }
    println!("  glasses served: {glasses}");
}

#[derive(Parser, Debug)]
#[command(name = "lemonade_stand")]
#[command(about = "Tap your way through a glass of lemonade", long_about = None)]
struct Cli {
    /// Seed for reproducible squeeze counts
    #[arg(long)]
    seed: Option<u64>,

    /// TOML game configuration
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    lemonade::logging::init_default();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut builder = GameBuilder::new().config(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut machine = builder.build()?;

    // Rendering is driven by change notifications.
    let (tx, rx) = mpsc::channel();
    machine.subscribe(move |change| {
        let _ = tx.send(*change);
    });

    render(machine.state(), machine.glasses_served());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        machine.advance();
        for change in rx.try_iter() {
            render(change.to, machine.glasses_served());
        }
        io::stdout().flush()?;
    }

    println!(
        "\nThanks for playing! {} taps, {} glasses served.",
        machine.taps(),
        machine.glasses_served()
    );
    Ok(())
}
