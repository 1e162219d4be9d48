use super::*;
use crate::board::Setup;
use crate::error::RulesError;

fn kings() -> Setup {
    Setup::new()
        .piece(0, 0, Color::White, PieceKind::King)
        .piece(7, 7, Color::Black, PieceKind::King)
}

#[test]
fn test_pawn_attacks_follow_color() {
    // White pawn on e4 attacks d5 and f5, not d3
    let b = kings()
        .piece(4, 3, Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    assert!(is_square_attacked(&b, Color::White, 3, 4));
    assert!(is_square_attacked(&b, Color::White, 5, 4));
    assert!(!is_square_attacked(&b, Color::White, 3, 2));
    assert!(!is_square_attacked(&b, Color::White, 4, 4));

    // Black pawn on e5 attacks d4 and f4
    let b = kings()
        .piece(4, 4, Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();
    assert!(is_square_attacked(&b, Color::Black, 3, 3));
    assert!(is_square_attacked(&b, Color::Black, 5, 3));
    assert!(!is_square_attacked(&b, Color::Black, 3, 5));
}

#[test]
fn test_knight_attacks() {
    let b = kings()
        .piece(4, 3, Color::White, PieceKind::Knight)
        .build()
        .unwrap();
    let hits = (0..8)
        .flat_map(|x| (0..8).map(move |y| (x, y)))
        .filter(|&(x, y)| is_square_attacked(&b, Color::White, x, y))
        .count();
    // 8 knight targets plus the 3 neighbours of the king on a1
    assert_eq!(hits, 8 + 3);
    assert!(is_square_attacked(&b, Color::White, 5, 5));
    assert!(is_square_attacked(&b, Color::White, 2, 2));
    assert!(!is_square_attacked(&b, Color::White, 4, 5));
}

#[test]
fn test_king_attacks_adjacent_only() {
    let b = kings().build().unwrap();
    assert!(is_square_attacked(&b, Color::Black, 6, 6));
    assert!(is_square_attacked(&b, Color::Black, 7, 6));
    assert!(!is_square_attacked(&b, Color::Black, 5, 5));
}

#[test]
fn test_slider_blocked() {
    // Rook on a4, blocker on a6
    let b = kings()
        .piece(0, 3, Color::Black, PieceKind::Rook)
        .piece(0, 5, Color::White, PieceKind::Knight)
        .build()
        .unwrap();
    assert!(is_square_attacked(&b, Color::Black, 0, 4));
    assert!(is_square_attacked(&b, Color::Black, 0, 5)); // blocker itself
    assert!(!is_square_attacked(&b, Color::Black, 0, 6)); // behind the blocker
    assert!(is_square_attacked(&b, Color::Black, 7, 3));
    assert!(!is_square_attacked(&b, Color::Black, 1, 4)); // rooks don't go diagonal
}

#[test]
fn test_queen_attacks_both_ways() {
    let b = kings()
        .piece(3, 3, Color::Black, PieceKind::Queen)
        .build()
        .unwrap();
    assert!(is_square_attacked(&b, Color::Black, 6, 6));
    assert!(is_square_attacked(&b, Color::Black, 3, 0));
    assert!(!is_square_attacked(&b, Color::Black, 5, 4));
}

#[test]
fn test_bishop_diagonal_blocked_by_own_piece() {
    let b = kings()
        .piece(2, 0, Color::White, PieceKind::Bishop)
        .piece(4, 2, Color::White, PieceKind::Knight)
        .build()
        .unwrap();
    assert!(is_square_attacked(&b, Color::White, 3, 1));
    assert!(is_square_attacked(&b, Color::White, 4, 2));
    assert!(!is_square_attacked(&b, Color::White, 5, 3));
}

#[test]
fn test_king_in_check() {
    let b = kings()
        .piece(0, 5, Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    assert!(is_king_in_check(&b, Color::White).unwrap());
    assert!(!is_king_in_check(&b, Color::Black).unwrap());
}

#[test]
fn test_missing_king_is_invariant_violation() {
    let mut b = Board::empty();
    b.spawn(0, 0, Color::White, PieceKind::King);
    assert!(matches!(
        is_king_in_check(&b, Color::Black),
        Err(RulesError::KingNotFound(Color::Black))
    ));
}

#[test]
fn test_probe_detects_discovered_check() {
    // Knight on e2 is pinned to the king on e1 by the rook on e8
    let b = Setup::new()
        .piece(4, 0, Color::White, PieceKind::King)
        .piece(4, 1, Color::White, PieceKind::Knight)
        .piece(4, 7, Color::Black, PieceKind::Rook)
        .piece(0, 7, Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let knight = b.get(4, 1).unwrap();
    let probe = Move::new(knight, sq(5, 3).unwrap());

    assert!(leaves_king_in_check(&b, &probe).unwrap());
    // The real board is untouched
    assert_eq!(b.get(4, 1), Some(knight));
    assert!(!is_king_in_check(&b, Color::White).unwrap());
}
