use crate::{error::RulesResult, game::Game, types::Move};

/// Pure perft node count.
/// Counts all legal move sequences from the current position down to `depth`.
pub fn perft(game: &Game, depth: u8) -> RulesResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut scratch = game.clone();
    let moves = scratch.legal_moves()?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = game.clone();
        child.commit(mv);
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft split by root move, in generation order.
pub fn perft_divide(game: &Game, depth: u8) -> RulesResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut scratch = game.clone();
    let moves = scratch.legal_moves()?;

    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = game.clone();
        child.commit(&mv);
        out.push((mv, perft(&child, depth - 1)?));
    }
    Ok(out)
}
