use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
    pub stats_area: Rect,
    pub about_area: Rect,
    pub keybindings_area: Rect,
    pub footer_area: Rect,
}

/// Create the main layout
/// - Header (3 rows): title and theme selector
/// - Content: left column (timer card over task card) | right column (stats over about)
/// - Keybindings bar and footer (1 row each)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Timer + tasks
            Constraint::Percentage(38), // Stats + about
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(16), // Timer card
            Constraint::Min(0),     // Task card
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Stats card
            Constraint::Min(0),     // About card
        ])
        .split(columns[1]);

    MainLayout {
        header_area: rows[0],
        timer_area: left[0],
        tasks_area: left[1],
        stats_area: right[0],
        about_area: right[1],
        keybindings_area: rows[2],
        footer_area: rows[3],
    }
}

/// Create centered modal area (for the delete confirmation)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.timer_area.height, 16);
        assert!(layout.tasks_area.height > 0);
        assert!(layout.stats_area.height > 0);
        assert!(layout.about_area.height > 0);
        assert!(layout.timer_area.width > layout.stats_area.width);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 7);
    }
}
