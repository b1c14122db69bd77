//! Geosantos - Entry Point
//!
//! Terminal front end for the quiz core: validate a single click, list
//! the catalog, or play rounds by typing coordinates.

use clap::{Parser, Subcommand, ValueEnum};
use geosantos::validation::format_distance;
use geosantos::{validate, Catalog, GameConfig, GameMode, GeoPoint, Result, RoundSession, ValidationResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// O Caiçara - geography quiz of Santos
#[derive(Parser, Debug)]
#[command(name = "geosantos")]
#[command(about = "Click-to-target scoring for the Santos geography quiz")]
struct Args {
    /// Target catalog (TOML)
    #[arg(long, global = true, default_value = "data/santos.toml")]
    data: PathBuf,

    /// Optional scoring config (TOML); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single click against a named target
    Validate {
        /// Game mode: places or neighborhoods
        #[arg(long, default_value = "places")]
        mode: GameMode,

        /// Target name as listed in the catalog
        #[arg(long)]
        target: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Seconds left on the round clock
        #[arg(long, default_value_t = 0.0)]
        time_left: f64,

        /// Consecutive hits including this click
        #[arg(long, default_value_t = 0)]
        streak: u32,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List catalog targets for a mode
    List {
        #[arg(long, default_value = "places")]
        mode: GameMode,
    },

    /// Play rounds interactively, answering with "lat,lng"
    Play {
        #[arg(long, default_value = "places")]
        mode: GameMode,

        /// Number of rounds
        #[arg(long, default_value_t = 10)]
        rounds: u32,

        /// Random seed for a reproducible target order
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geosantos=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let catalog = Catalog::load(&args.data)?;
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Validate {
            mode,
            target,
            lat,
            lng,
            time_left,
            streak,
            format,
        } => {
            let target = catalog.find(mode, &target)?;
            let result = validate(
                GeoPoint::new(lat, lng),
                target,
                time_left,
                streak,
                mode,
                config.for_mode(mode),
            )?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => print_result(&result),
            }
        }
        Command::List { mode } => {
            for target in catalog.targets(mode) {
                println!("{}", target.name);
            }
        }
        Command::Play { mode, rounds, seed } => {
            play(&catalog, &config, mode, rounds, seed)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

fn play(catalog: &Catalog, config: &GameConfig, mode: GameMode, rounds: u32, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = RoundSession::new(mode);
    let scoring = config.for_mode(mode);

    tracing::info!(%mode, rounds, seed, "Starting game");

    println!("\n=== O CAIÇARA ===");
    println!("Modo: {}", mode.label());
    println!("Responda com \"lat,lng\". Digite \"q\" para sair.");

    'rounds: while session.round_number < rounds {
        let Some(target) = session.next_target(catalog, &mut rng) else {
            println!("Nenhum alvo disponível para este modo.");
            break;
        };

        println!();
        println!("Rodada {}/{}: onde fica {}?", session.round_number + 1, rounds, target.name);
        let started = Instant::now();

        let clicked = loop {
            print!("> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break 'rounds;
            }
            let input = input.trim();
            if input == "q" || input == "quit" {
                break 'rounds;
            }
            match parse_click(input) {
                Some(point) if point.is_valid() => break point,
                _ => println!("Coordenadas inválidas. Exemplo: -23.9618,-46.3322"),
            }
        };

        let time_left = session.time_left(started.elapsed(), scoring);
        let result = validate(
            clicked,
            target,
            time_left,
            session.streak_for_next(),
            mode,
            scoring,
        )?;
        session.record(&result);
        print_result(&result);
        println!(
            "Total: {} pontos | Sequência: {}",
            session.total_score, session.consecutive_correct
        );
    }

    println!(
        "\nFim de jogo! {} pontos em {} rodadas ({:.0}% de acertos, melhor sequência {}).",
        session.total_score,
        session.round_number,
        session.accuracy() * 100.0,
        session.best_streak
    );
    Ok(())
}

fn parse_click(input: &str) -> Option<GeoPoint> {
    let (lat, lng) = input.split_once(',')?;
    Some(GeoPoint::new(lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}

fn print_result(result: &ValidationResult) {
    println!("{}", result.message);
    println!(
        "  Distância: {} | {}",
        format_distance(result.distance.distance_m),
        if result.is_correct { "acerto" } else { "erro" }
    );
    let s = &result.score;
    println!(
        "  Pontos: {} (base {}, precisão {}, tempo {}, sequência {})",
        s.total, s.base_points, s.precision_bonus, s.time_bonus, s.consecutive_bonus
    );
}
