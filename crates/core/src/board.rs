//! Board module - manages the game grid
//!
//! The grid is `rows x columns` cells, each empty or holding a [`Block`] that
//! remembers which piece painted it. Uses a flat vector in row-major order.
//! Coordinates: (col, row) where col grows left to right and row 0 is the top.
//!
//! Collision never tests `col < 0`: the piece controller refuses any move or
//! rotation that would put a cell left of column 0, so negative columns are
//! never requested here. A negative column simply reads as "no cell".

use crate::error::{Error, Result};
use crate::piece::ActivePiece;
use crate::types::{Block, Cell, Color, DEFAULT_COLUMNS, DEFAULT_ROWS, MIN_GRID_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board, rejecting dimensions a 4x4 piece box cannot fit in
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < MIN_GRID_DIM || columns < MIN_GRID_DIM {
            return Err(Error::GridTooSmall { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        })
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.columns || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.columns + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get cell at (col, row); `None` if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row); returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Would `piece`, moved by (`dx`, `dy`), hit the floor, the right wall, or a
    /// block painted by another piece
    pub fn would_collide(&self, piece: &ActivePiece, dy: i32, dx: i32) -> bool {
        piece.cells().iter().any(|&(col, row)| {
            let col = col + dx;
            let row = row + dy;
            if row >= self.rows as i32 || col >= self.columns as i32 {
                return true;
            }
            row >= 0
                && matches!(
                    self.get(col, row),
                    Some(Some(Block { piece_id, .. })) if piece_id != piece.id
                )
        })
    }

    /// Write `value` into every visible cell of `piece`'s footprint
    pub fn write_cells(&mut self, piece: &ActivePiece, value: Cell) {
        for (col, row) in piece.cells() {
            if row >= 0 && (row as usize) < self.rows {
                self.set(col, row, value);
            }
        }
    }

    /// Remove every full row, dropping the rows above into place
    ///
    /// Returns the cleared row indices in ascending order. A piece lock completes
    /// at most 4 rows, but boards set up through [`Board::set`] may hold more.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let width = self.columns;
        let mut write_row = self.rows;

        // Scan from bottom to top, compacting survivors downward.
        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);

        cleared_rows.reverse();
        cleared_rows
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Repaint every occupied cell with `color`, keeping piece ids
    pub fn recolor(&mut self, color: Color) {
        for block in self.cells.iter_mut().flatten() {
            block.color = color;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    /// Empty 24x10 board
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![None; DEFAULT_ROWS * DEFAULT_COLUMNS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{rotations, PieceDefinition};
    use crate::types::{PieceId, PieceKind};

    fn block(id: PieceId) -> Cell {
        Some(Block {
            color: Color(0x112233),
            piece_id: id,
        })
    }

    fn piece(kind: PieceKind, id: PieceId) -> ActivePiece {
        ActivePiece::spawn(
            id,
            &PieceDefinition {
                kind,
                color: Color(0x445566),
                rotations: rotations(kind),
            },
        )
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(24, 10).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 23), Some(239));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 24), None);
    }

    #[test]
    fn test_rejects_small_grids() {
        assert_eq!(
            Board::new(3, 10),
            Err(Error::GridTooSmall {
                rows: 3,
                columns: 10
            })
        );
        assert!(Board::new(24, 3).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_own_cells_do_not_collide() {
        let mut board = Board::new(24, 10).unwrap();
        let p = piece(PieceKind::O, 7).shifted(0, 5);
        board.write_cells(&p, Some(p.block()));
        assert!(!board.would_collide(&p, 1, 0));
        assert!(!board.would_collide(&p, 0, 0));
    }

    #[test]
    fn test_foreign_cells_collide() {
        let mut board = Board::new(24, 10).unwrap();
        let p = piece(PieceKind::O, 7).shifted(0, 5);
        // O cells at rows 4-5, columns 4-5; block below column 4.
        board.set(4, 6, block(3));
        assert!(board.would_collide(&p, 1, 0));
        assert!(!board.would_collide(&p, 0, 1));
    }

    #[test]
    fn test_floor_and_right_wall_collide() {
        let board = Board::new(24, 10).unwrap();
        let floor = piece(PieceKind::O, 1).shifted(0, 23);
        assert!(board.would_collide(&floor, 1, 0));

        let wall = piece(PieceKind::O, 1).shifted(4, 5);
        assert!(board.would_collide(&wall, 0, 1));
    }

    #[test]
    fn test_cells_above_grid_never_collide_with_blocks() {
        let mut board = Board::new(24, 10).unwrap();
        board.set(4, 0, block(2));
        let p = piece(PieceKind::O, 1).shifted(0, -1);
        // Cells at rows -2..-1 moved by dy=1 land on rows -1..0; row 0 col 4 is taken.
        assert!(board.would_collide(&p, 1, 0));
        // Without the block only the hidden row is touched.
        board.set(4, 0, None);
        assert!(!board.would_collide(&p, 1, 0));
    }

    #[test]
    fn test_write_cells_skips_hidden_rows() {
        let mut board = Board::new(24, 10).unwrap();
        let p = piece(PieceKind::I, 1).rotated();
        board.write_cells(&p, Some(p.block()));
        // Vertical I at rows -1..2: three visible cells.
        assert_eq!(board.occupied_count(), 3);
        board.write_cells(&p, None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::new(6, 4).unwrap();
        for col in 0..4 {
            board.set(col, 5, block(1));
            board.set(col, 3, block(1));
        }
        board.set(0, 4, block(2));
        board.set(2, 2, block(3));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared, vec![3, 5]);
        assert_eq!(board.occupied_count(), 2);
        // Row 4 had one cleared row below it; row 2 had two.
        assert!(board.is_occupied(0, 5));
        assert!(board.is_occupied(2, 4));
        assert!(board.row(0).iter().all(|c| c.is_none()));
        assert!(board.row(1).iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Board::new(24, 10).unwrap();
        for row in 18..24 {
            for col in 0..10 {
                board.set(col, row, block(1));
            }
        }
        board.set(7, 17, block(2));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared, vec![18, 19, 20, 21, 22, 23]);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(7, 23));
    }

    #[test]
    fn test_recolor_keeps_ids() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(1, 1, block(5));
        board.recolor(Color(0x696969));
        assert_eq!(
            board.get(1, 1),
            Some(Some(Block {
                color: Color(0x696969),
                piece_id: 5
            }))
        );
    }
}
