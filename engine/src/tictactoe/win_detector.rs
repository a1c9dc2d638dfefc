use super::board::Board;
use super::types::{Mark, WINNING_LINES, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark != Mark::Empty && mark == cells[line[1]] && mark == cells[line[2]] {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_check_win_none_on_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_check_win_detects_row() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_check_win_detects_column() {
        let board = Board::from_cells([O, X, E, O, X, E, O, E, X]);
        assert_eq!(check_win(&board), Some(O));
    }

    #[test]
    fn test_check_win_with_line_reports_cells() {
        let board = Board::from_cells([O, X, X, E, O, X, E, E, O]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, O);
        assert_eq!(line.cells, [0, 4, 8]);
    }

    #[test]
    fn test_check_win_none_on_full_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_win_with_line(&board), None);
    }
}
