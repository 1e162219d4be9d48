//! Shared helpers for integration tests.

#![allow(dead_code)]

use chess_rules::{Color, Game, Move, PieceKind, Setup};

/// Builds a game from an 8-row diagram, rank 8 first.
///
/// Upper case is white, lower case black, `.` is an empty square. Piece
/// letters are `p n b r q k`.
pub fn game_from_rows(rows: [&str; 8], to_move: Color) -> Game {
    let mut setup = Setup::new().to_move(to_move);
    for (i, row) in rows.iter().enumerate() {
        let y = 7 - i as i8;
        assert_eq!(row.len(), 8, "row {} must have 8 squares: {row:?}", i + 1);
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => panic!("Invalid piece char in diagram: {ch}"),
            };
            setup = setup.piece(x as i8, y, color, kind);
        }
    }
    Game::from_setup(setup).expect("diagram must describe a valid position")
}

pub const KIWIPETE: [&str; 8] = [
    "r...k..r",
    "p.ppqpb.",
    "bn..pnp.",
    "...PN...",
    ".p..P...",
    "..N..Q.p",
    "PPPBBPPP",
    "R...K..R",
];

pub const ENDGAME_ROOKS: [&str; 8] = [
    "........",
    "..p.....",
    "...p....",
    "KP.....r",
    ".R...p.k",
    "........",
    "....P.P.",
    "........",
];

/// Looks up the legal move from `from` to `to`, both in algebraic form.
pub fn find_move(game: &mut Game, from: &str, to: &str) -> Option<Move> {
    let (fx, fy) = parse_square(from);
    let target = parse_square(to);
    let piece = game.occupant_at(fx, fy)?;
    game.moves_for(piece)
        .expect("kings present")
        .iter()
        .find(|m| m.legal && (m.x(), m.y()) == target)
        .copied()
}

/// Plays a sequence of `"e2e4"` style moves, panicking on any that is not
/// legal in the current position.
pub fn play(game: &mut Game, moves: &[&str]) {
    for uci in moves {
        let mv = find_move(game, &uci[0..2], &uci[2..4])
            .unwrap_or_else(|| panic!("{uci} should be legal"));
        game.commit(&mv);
    }
}

fn parse_square(s: &str) -> (i8, i8) {
    let b = s.as_bytes();
    ((b[0] - b'a') as i8, (b[1] - b'1') as i8)
}
