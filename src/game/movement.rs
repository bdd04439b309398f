use crate::game::board::{Board, Cell, Point};
use crate::game::piece::PieceShape;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Movement {
    Left,
    Right,
    Down,
    RotateLeft,
    RotateRight,
}

/// Try to apply `movement` to the active piece. Commit-or-reject: on success
/// the board holds the piece at its new cells and the result is `true`; on
/// rejection the board is untouched and the result is `false`.
///
/// Rotation pivots on the second active cell in scan order and applies a
/// plain 90-degree matrix. There are no wall kicks; rotations near walls and
/// stacks are simply rejected.
pub fn attempt_move(board: &mut Board, piece: &PieceShape, movement: Movement) -> bool {
    let current = board.active_cells();
    if current.is_empty() {
        return false;
    }

    let candidates: Vec<Point> = match movement {
        Movement::Left => translate(&current, -1, 0),
        Movement::Right => translate(&current, 1, 0),
        Movement::Down => translate(&current, 0, 1),
        Movement::RotateLeft | Movement::RotateRight => {
            if !piece.rotates {
                // The square: accepted as a successful no-op.
                return true;
            }
            let pivot = current[1];
            current
                .iter()
                .map(|p| {
                    let tx = p.x - pivot.x;
                    let ty = p.y - pivot.y;
                    let (rx, ry) = match movement {
                        Movement::RotateLeft => (-ty, tx),
                        _ => (ty, -tx),
                    };
                    Point::new(rx + pivot.x, ry + pivot.y)
                })
                .collect()
        }
    };

    for p in &candidates {
        if !p.in_bounds() {
            return false;
        }
        // A candidate may land on the piece's own current footprint; only
        // foreign dead cells reject the move.
        if board.get(p.x as usize, p.y as usize) == Cell::Dead && !current.contains(p) {
            return false;
        }
    }

    for p in &current {
        board.set(p.x as usize, p.y as usize, Cell::Empty);
    }
    for p in &candidates {
        board.set(p.x as usize, p.y as usize, Cell::Alive);
    }
    true
}

fn translate(cells: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    cells.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::game::piece::PIECES;

    fn place(board: &mut Board, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            board.set(x, y, Cell::Alive);
        }
    }

    #[test]
    fn translation_moves_every_cell() {
        let mut board = Board::new();
        place(&mut board, &[(4, 0), (5, 0), (6, 0), (7, 0)]);

        assert!(attempt_move(&mut board, &PIECES[0], Movement::Down));
        assert_eq!(
            board.active_cells(),
            vec![
                Point::new(4, 1),
                Point::new(5, 1),
                Point::new(6, 1),
                Point::new(7, 1),
            ]
        );
        assert!(attempt_move(&mut board, &PIECES[0], Movement::Left));
        assert_eq!(board.active_cells()[0], Point::new(3, 1));
    }

    #[test]
    fn no_active_piece_is_a_rejected_noop() {
        let mut board = Board::new();
        assert!(!attempt_move(&mut board, &PIECES[0], Movement::Down));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn rejected_move_never_mutates_the_board() {
        let mut board = Board::new();
        place(&mut board, &[(0, 5), (0, 6), (1, 6), (2, 6)]);
        board.set(3, 6, Cell::Dead);
        let before = board.clone();

        // Against the wall and against a dead cell.
        assert!(!attempt_move(&mut board, &PIECES[1], Movement::Left));
        assert_eq!(board, before);
        assert!(!attempt_move(&mut board, &PIECES[1], Movement::Right));
        assert_eq!(board, before);
    }

    #[test]
    fn bottom_row_rejects_down() {
        let mut board = Board::new();
        let bottom = BOARD_HEIGHT - 1;
        place(&mut board, &[(4, bottom), (5, bottom)]);
        let before = board.clone();
        assert!(!attempt_move(&mut board, &PIECES[3], Movement::Down));
        assert_eq!(board, before);
    }

    #[test]
    fn square_rotation_is_an_accepted_noop() {
        let mut board = Board::new();
        place(&mut board, &[(4, 0), (5, 0), (4, 1), (5, 1)]);
        let before = board.clone();

        assert!(attempt_move(&mut board, &PIECES[3], Movement::RotateLeft));
        assert_eq!(board, before);
        assert!(attempt_move(&mut board, &PIECES[3], Movement::RotateRight));
        assert!(attempt_move(&mut board, &PIECES[3], Movement::RotateRight));
        assert_eq!(board, before);
    }

    #[test]
    fn rotation_pivots_on_the_second_scan_cell() {
        let mut board = Board::new();
        // Vertical I piece: scan order is top to bottom, pivot is (4, 3).
        place(&mut board, &[(4, 2), (4, 3), (4, 4), (4, 5)]);

        assert!(attempt_move(&mut board, &PIECES[0], Movement::RotateRight));
        // (x, y) -> (y, -x) about (4, 3): the column becomes a row through
        // the pivot.
        assert_eq!(
            board.active_cells(),
            vec![
                Point::new(3, 3),
                Point::new(4, 3),
                Point::new(5, 3),
                Point::new(6, 3),
            ]
        );
    }

    #[test]
    fn rotate_right_then_left_round_trips_the_i_piece() {
        let mut board = Board::new();
        place(&mut board, &[(4, 2), (4, 3), (4, 4), (4, 5)]);
        let before = board.clone();

        assert!(attempt_move(&mut board, &PIECES[0], Movement::RotateRight));
        assert_ne!(board, before);
        assert!(attempt_move(&mut board, &PIECES[0], Movement::RotateLeft));
        assert_eq!(board, before);
    }

    #[test]
    fn rotation_against_the_wall_is_rejected() {
        let mut board = Board::new();
        // Vertical I piece hugging the left wall; rotating right would reach
        // x = -1.
        place(&mut board, &[(0, 2), (0, 3), (0, 4), (0, 5)]);
        let before = board.clone();
        assert!(!attempt_move(&mut board, &PIECES[0], Movement::RotateRight));
        assert_eq!(board, before);
    }

    #[test]
    fn own_footprint_never_rejects_a_rotation() {
        let mut board = Board::new();
        // Vertical I piece; the rotated row passes through the pivot cell,
        // so one candidate lands on the piece's own footprint. Dead cells
        // sit next to the column without being hit by the rotation.
        place(&mut board, &[(4, 2), (4, 3), (4, 4), (4, 5)]);
        board.set(3, 2, Cell::Dead);
        board.set(5, 2, Cell::Dead);

        assert!(attempt_move(&mut board, &PIECES[0], Movement::RotateRight));
        let active = board.active_cells();
        assert_eq!(active.len(), 4);
        assert!(active.contains(&Point::new(4, 3)));
    }

    #[test]
    fn piece_stays_inside_the_board_after_any_accepted_move() {
        let mut board = Board::new();
        place(&mut board, &[(8, 0), (9, 0), (8, 1), (9, 1)]);
        for movement in [Movement::Right, Movement::Down, Movement::Left] {
            attempt_move(&mut board, &PIECES[3], movement);
            let active = board.active_cells();
            assert_eq!(active.len(), 4);
            assert!(active.iter().all(Point::in_bounds));
            assert!(active
                .iter()
                .all(|p| p.x < BOARD_WIDTH as i32 && p.y < BOARD_HEIGHT as i32));
        }
    }
}
