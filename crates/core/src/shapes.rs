//! Shape catalog - pre-rotated 4x4 grids for every piece kind
//!
//! Rotations are lookup tables, not computed by matrix rotation. Each kind has
//! its own number of states (I/S/Z: 2, O: 1, T/J/L: 4) and rotation cycles
//! through them in order.

use crate::types::{Cell, PieceKind};

/// A single rotation state: 4 rows of 4 cells, `0` or the kind's id.
pub type ShapeGrid = [[Cell; 4]; 4];

/// Offset of a single mino relative to the grid origin (x, y)
pub type MinoOffset = (i8, i8);

const I_ROTATIONS: [ShapeGrid; 2] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
];

const O_ROTATIONS: [ShapeGrid; 1] = [[[0, 2, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]]];

const T_ROTATIONS: [ShapeGrid; 4] = [
    [[0, 3, 0, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 3, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [3, 3, 3, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [3, 3, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
];

const S_ROTATIONS: [ShapeGrid; 2] = [
    [[0, 4, 4, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 4, 0, 0], [0, 4, 4, 0], [0, 0, 4, 0], [0, 0, 0, 0]],
];

const Z_ROTATIONS: [ShapeGrid; 2] = [
    [[5, 5, 0, 0], [0, 5, 5, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 5, 0], [0, 5, 5, 0], [0, 5, 0, 0], [0, 0, 0, 0]],
];

const J_ROTATIONS: [ShapeGrid; 4] = [
    [[6, 0, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 6, 0], [0, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [6, 6, 6, 0], [0, 0, 6, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [0, 6, 0, 0], [6, 6, 0, 0], [0, 0, 0, 0]],
];

const L_ROTATIONS: [ShapeGrid; 4] = [
    [[0, 0, 7, 0], [7, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 7, 0, 0], [0, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [7, 7, 7, 0], [7, 0, 0, 0], [0, 0, 0, 0]],
    [[7, 7, 0, 0], [0, 7, 0, 0], [0, 7, 0, 0], [0, 0, 0, 0]],
];

/// All rotation states for a kind, in rotation order.
pub fn rotations(kind: PieceKind) -> &'static [ShapeGrid] {
    match kind {
        PieceKind::I => &I_ROTATIONS,
        PieceKind::O => &O_ROTATIONS,
        PieceKind::T => &T_ROTATIONS,
        PieceKind::S => &S_ROTATIONS,
        PieceKind::Z => &Z_ROTATIONS,
        PieceKind::J => &J_ROTATIONS,
        PieceKind::L => &L_ROTATIONS,
    }
}

/// Number of distinct rotation states for a kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Get the grid for a kind and rotation index (wrapped into range).
pub fn get_grid(kind: PieceKind, rotation: u8) -> &'static ShapeGrid {
    let states = rotations(kind);
    &states[rotation as usize % states.len()]
}

/// Get the occupied cells of a grid as (x, y) offsets, row-major.
///
/// Every catalog grid has exactly four occupied cells.
pub fn get_shape(kind: PieceKind, rotation: u8) -> [MinoOffset; 4] {
    let grid = get_grid(kind, rotation);
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0;
    for (y, row) in grid.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell != 0 && n < out.len() {
                out[n] = (x as i8, y as i8);
                n += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_four_cells_of_its_own_id() {
        for kind in PieceKind::ALL {
            for grid in rotations(kind) {
                let cells: Vec<Cell> = grid.iter().flatten().copied().filter(|&c| c != 0).collect();
                assert_eq!(cells.len(), 4, "{:?}", kind);
                assert!(cells.iter().all(|&c| c == kind.id()), "{:?}", kind);
            }
        }
    }

    #[test]
    fn rotation_counts() {
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(get_grid(PieceKind::I, 2), get_grid(PieceKind::I, 0));
        assert_eq!(get_grid(PieceKind::T, 5), get_grid(PieceKind::T, 1));
        assert_eq!(get_grid(PieceKind::O, 3), get_grid(PieceKind::O, 0));
    }

    #[test]
    fn i_piece_offsets() {
        assert_eq!(get_shape(PieceKind::I, 0), [(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(get_shape(PieceKind::I, 1), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    }
}
