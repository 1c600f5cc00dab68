//! Collision oracle - the single validity test for every piece mutation.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{COLS, ROWS};

/// Check whether `piece`, shifted by (dx, dy), overlaps a wall, the floor, or
/// a settled cell.
///
/// Cells above the top edge (negative rows) never hit settled cells, so pieces
/// may sit partially off the top, but they still respect the side walls.
pub fn collides(piece: &Piece, board: &Board, dx: i8, dy: i8) -> bool {
    piece.shape().iter().any(|&(mx, my)| {
        let x = piece.x as i16 + mx as i16 + dx as i16;
        let y = piece.y as i16 + my as i16 + dy as i16;

        if x < 0 || x >= COLS as i16 || y >= ROWS as i16 {
            return true;
        }

        y >= 0 && board.is_occupied(x as usize, y as usize)
    })
}
