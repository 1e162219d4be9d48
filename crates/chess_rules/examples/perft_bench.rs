//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [divide]
//!
//! Examples:
//!   # Default: depth 3 over every reference position
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Per-move split of the start position at depth 4
//!   cargo run --release --example perft_bench -p chess_rules -- 4 divide

use chess_rules::{Color, Game, PieceKind, Setup, perft, perft_divide};
use std::env;
use std::time::{Duration, Instant};

/// Reference positions as diagrams, rank 8 first
const TEST_POSITIONS: &[(&str, [&str; 8])] = &[
    (
        "Kiwipete",
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
    ),
    (
        "Rook endgame",
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
    ),
];

fn from_rows(rows: &[&str; 8]) -> Option<Game> {
    let mut setup = Setup::new();
    for (i, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => continue,
            };
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            setup = setup.piece(x as i8, 7 - i as i8, color, kind);
        }
    }
    Game::from_setup(setup).ok()
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    if args.get(2).is_some_and(|s| s == "divide") {
        run_divide(depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_divide(depth: u8) {
    let game = Game::new();
    let start = Instant::now();
    let split = match perft_divide(&game, depth) {
        Ok(split) => split,
        Err(e) => {
            eprintln!("perft failed: {e}");
            return;
        }
    };
    let elapsed = start.elapsed();

    let mut total = 0u64;
    for (mv, nodes) in &split {
        println!("{mv:<28} {nodes}");
        total += nodes;
    }
    println!();
    println!("Nodes: {total}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(total, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut games = vec![("Starting position", Game::new())];
    for (name, rows) in TEST_POSITIONS {
        match from_rows(rows) {
            Some(game) => games.push((*name, game)),
            None => eprintln!("Skipping {name}: invalid diagram"),
        }
    }

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, game) in &games {
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = match perft(game, depth) {
            Ok(n) => n,
            Err(e) => {
                println!(" error: {e}");
                continue;
            }
        };
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
