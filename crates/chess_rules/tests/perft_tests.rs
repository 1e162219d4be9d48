use std::time::Instant;

use rayon::prelude::*;

use chess_rules::{Color, Game, perft, perft_divide};

mod common;
use common::{ENDGAME_ROOKS, KIWIPETE, game_from_rows};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 1_000_000;

/// Reference counts for positions whose trees hold no promotions at these
/// depths (this engine only ever promotes to a queen).
fn cases() -> Vec<(&'static str, Game, Vec<(u8, u64)>)> {
    vec![
        (
            "start",
            Game::new(),
            vec![(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
        ),
        (
            "kiwipete",
            game_from_rows(KIWIPETE, Color::White),
            vec![(1, 48), (2, 2_039), (3, 97_862)],
        ),
        (
            "endgame rooks",
            game_from_rows(ENDGAME_ROOKS, Color::White),
            vec![(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
        ),
    ]
}

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    cases().par_iter().for_each(|(name, game, depths)| {
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for (depth, expected) in depths {
            if !full && *expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for {} (expected {} nodes) - set {}=1 to run all.",
                    depth, name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(game, *depth).expect("kings present");
            assert!(
                got == *expected,
                "Perft mismatch for '{}' at depth {}: expected {}, got {}",
                name,
                depth,
                expected,
                got
            );

            ran_depths.push(*depth);
            total_nodes += got;
        }

        if !ran_depths.is_empty() {
            println!(
                "{} done: depths {:?}, total nodes {}, elapsed {:.3?}",
                name,
                ran_depths,
                total_nodes,
                case_start.elapsed()
            );
        }
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Game::new(), 0).unwrap(), 1);
}

#[test]
fn perft_leaves_game_untouched() {
    let game = Game::new();
    perft(&game, 2).unwrap();
    assert_eq!(game.board(), Game::new().board());
    assert_eq!(game.half_move_clock(), 0);
}

#[test]
fn perft_divide_sums_to_perft() {
    let start = perft_divide(&Game::new(), 2).unwrap();
    assert_eq!(start.len(), 20);
    assert!(start.iter().all(|(_, n)| *n == 20));

    let kiwipete = game_from_rows(KIWIPETE, Color::White);
    let split = perft_divide(&kiwipete, 2).unwrap();
    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
    assert!(split.iter().filter(|(m, _)| m.castles).count() == 2);
}
