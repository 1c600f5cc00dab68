//! Piece actor - the falling piece and its validated mutations
//!
//! Mutations never happen in place: each helper returns the candidate piece
//! only when the collision oracle accepts it, so a rejected move or rotation
//! leaves the caller's piece untouched.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::{get_grid, get_shape, rotation_count, MinoOffset, ShapeGrid};
use crate::types::{Cell, PieceKind, SPAWN_X, SPAWN_Y};

/// Horizontal offsets tried, in order, when a rotation is blocked.
///
/// Original position, one column left, one column right. This is a minimal
/// two-kick policy rather than a full SRS kick table.
pub const WALL_KICKS: [i8; 3] = [0, -1, 1];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Index into the kind's rotation list.
    pub rotation: u8,
    /// Column of the 4x4 grid origin (may be negative).
    pub x: i8,
    /// Row of the 4x4 grid origin (may be negative).
    pub y: i8,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % rotation_count(kind),
            x,
            y,
        }
    }

    /// Create a new piece at the spawn position in rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, 0, SPAWN_X, SPAWN_Y)
    }

    /// Grid of the current rotation state
    pub fn grid(&self) -> &'static ShapeGrid {
        get_grid(self.kind, self.rotation)
    }

    /// Occupied cells of the current rotation as offsets from the grid origin
    pub fn shape(&self) -> [MinoOffset; 4] {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the occupied cells (may be off-board).
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Value written into the board when this piece locks.
    pub fn cell_value(&self) -> Cell {
        self.kind.id()
    }

    /// Same piece shifted by (dx, dy), unchecked.
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece in its next rotation state at the same position, unchecked.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % rotation_count(self.kind),
            ..*self
        }
    }

    /// Check if the piece fits the board at its current position
    pub fn fits(&self, board: &Board) -> bool {
        !collides(self, board, 0, 0)
    }

    /// Shift by (dx, dy) if the result does not collide.
    pub fn try_move(&self, board: &Board, dx: i8, dy: i8) -> Option<Self> {
        if collides(self, board, dx, dy) {
            None
        } else {
            Some(self.offset(dx, dy))
        }
    }

    /// Rotate to the next state, trying the wall kicks in order.
    ///
    /// Returns `None` when every kick collides; the caller keeps its piece.
    pub fn try_rotate(&self, board: &Board) -> Option<Self> {
        let rotated = self.rotated();
        WALL_KICKS
            .iter()
            .find(|&&dx| !collides(&rotated, board, dx, 0))
            .map(|&dx| rotated.offset(dx, 0))
    }

    /// Lowest position reachable by moving straight down.
    pub fn landing(&self, board: &Board) -> Self {
        let mut piece = *self;
        while let Some(next) = piece.try_move(board, 0, 1) {
            piece = next;
        }
        piece
    }
}
