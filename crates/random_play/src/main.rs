//! Random self-play CLI
//!
//! Plays a batch of random games and prints a JSON summary.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use random_play::{PlayConfig, Summary, run};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Random self-play driver");
    println!();
    println!("Usage:");
    println!("  random_play [--config FILE] [--games N] [--seed S] [--max-plies N] [--moves]");
    println!();
    println!("Options:");
    println!("  --config, -c     TOML file with games, max_plies, seed and a [rules] table");
    println!("  --games, -g      Number of games (overrides the file)");
    println!("  --seed, -s       RNG seed (overrides the file)");
    println!("  --max-plies, -m  Abandon games after this many plies");
    println!("  --moves          Include every game's move list in the output");
    println!();
    println!("Logging is controlled with RUST_LOG (default: info).");
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a PlayConfig,
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<Vec<random_play::GameRecord>>,
}

struct Args {
    config_path: Option<PathBuf>,
    games: Option<u32>,
    seed: Option<u64>,
    max_plies: Option<u32>,
    with_moves: bool,
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args {
        config_path: None,
        games: None,
        seed: None,
        max_plies: None,
        with_moves: false,
    };

    let mut i = 0;
    while i < args.len() {
        let value = || {
            args.get(i + 1)
                .with_context(|| format!("{} needs a value", args[i]))
        };
        match args[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--games" | "-g" => {
                parsed.games = Some(value()?.parse().context("--games expects a number")?);
                i += 1;
            }
            "--seed" | "-s" => {
                parsed.seed = Some(value()?.parse().context("--seed expects a number")?);
                i += 1;
            }
            "--max-plies" | "-m" => {
                parsed.max_plies =
                    Some(value()?.parse().context("--max-plies expects a number")?);
                i += 1;
            }
            "--moves" => parsed.with_moves = true,
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let mut config = match &args.config_path {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlayConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }

    let records = run(&config).context("self-play failed")?;
    let report = Report {
        config: &config,
        summary: Summary::from_records(&records),
        games: args.with_moves.then_some(records),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
