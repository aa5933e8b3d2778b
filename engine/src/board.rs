use crate::types::{Mark, PlaceError, Position};

/// Square board of cells. Cells only ever transition from empty to a mark
/// during live play; the search engine additionally places and clears marks
/// through the crate-internal helpers while exploring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Mark::Empty; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Places `mark` if the cell is currently empty. Either fully applies or
    /// leaves the board unchanged.
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if mark == Mark::Empty {
            return Err(PlaceError::InvalidMark);
        }
        if self.cells[row][col] != Mark::Empty {
            return Err(PlaceError::Occupied);
        }
        self.cells[row][col] = mark;
        Ok(())
    }

    /// Empty coordinates in row-major scan order. All search tie-breaks
    /// depend on this ordering.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Speculative placement for the search engine. Every call is paired with
    /// a `clear` before the search returns.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), Mark::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_on_empty_cell() {
        let mut board = Board::new(3);
        assert_eq!(board.set(1, 1, Mark::X), Ok(()));
        assert_eq!(board.get(1, 1), Mark::X);
    }

    #[test]
    fn test_set_on_occupied_cell_fails_without_mutation() {
        let mut board = Board::new(3);
        board.set(1, 1, Mark::X).unwrap();
        assert_eq!(board.set(1, 1, Mark::O), Err(PlaceError::Occupied));
        assert_eq!(board.get(1, 1), Mark::X);
    }

    #[test]
    fn test_set_empty_mark_is_invalid() {
        let mut board = Board::new(3);
        assert_eq!(board.set(0, 0, Mark::Empty), Err(PlaceError::InvalidMark));
        assert_eq!(board.get(0, 0), Mark::Empty);
    }

    #[test]
    fn test_available_moves_row_major_order() {
        let mut board = Board::new(3);
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();

        let moves = board.available_moves();
        let expected = vec![
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_available_moves_plus_occupied_is_board_area() {
        let mut board = Board::new(3);
        let placements = [(0, 0, Mark::X), (0, 1, Mark::O), (2, 2, Mark::X)];
        for (i, &(row, col, mark)) in placements.iter().enumerate() {
            board.set(row, col, mark).unwrap();
            assert_eq!(board.available_moves().len() + i + 1, 9);
        }
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3);
        let marks = [Mark::X, Mark::O];
        for row in 0..3 {
            for col in 0..3 {
                assert!(!board.is_full());
                board.set(row, col, marks[(row + col) % 2]).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::new(3);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(2, 2));
        assert!(!board.in_bounds(3, 0));
        assert!(!board.in_bounds(0, 3));
    }
}
