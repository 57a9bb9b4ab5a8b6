use crate::table::{GRID_COLS, GRID_ROWS, GridPos};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct TableLayout {
    pub header_area: Rect,
    pub grid_area: Rect,
    pub info_area: Rect,
    pub legend_area: Rect,
    pub help_area: Rect,
}

pub struct ScreenLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_table_chunks(area: Rect) -> TableLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(GRID_ROWS as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    TableLayout {
        header_area: chunks[0],
        grid_area: chunks[1],
        info_area: chunks[2],
        legend_area: chunks[3],
        help_area: chunks[4],
    }
}

/// Header, body and a three-line key hint footer.
pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Screen rectangle of a grid cell inside `grid_area` (borders excluded).
pub fn cell_rect(grid_area: Rect, pos: GridPos) -> Rect {
    let cell_w = grid_area.width / GRID_COLS as u16;
    let cell_h = (grid_area.height / GRID_ROWS as u16).max(1);
    Rect::new(
        grid_area.x + (pos.col as u16 - 1) * cell_w,
        grid_area.y + (pos.row as u16 - 1) * cell_h,
        cell_w,
        cell_h,
    )
}

/// Fixed-size popup area centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.question_area.height, 5);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.answer_area.height, 38 - 12);
    }

    #[test]
    fn test_table_layout() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = calculate_table_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.info_area.height, 3);
        assert_eq!(layout.legend_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.grid_area.height, 48 - 14);
    }

    #[test]
    fn test_cell_rect() {
        let grid = Rect::new(2, 4, 90, 30);
        assert_eq!(cell_rect(grid, GridPos::new(1, 1)), Rect::new(2, 4, 5, 3));
        assert_eq!(cell_rect(grid, GridPos::new(10, 18)), Rect::new(87, 31, 5, 3));
    }

    #[test]
    fn test_cells_stay_inside_grid() {
        let grid = Rect::new(0, 0, 73, 21);
        let last = cell_rect(grid, GridPos::new(GRID_ROWS, GRID_COLS));
        assert!(last.right() <= grid.right());
        assert!(last.bottom() <= grid.bottom());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));
    }
}
