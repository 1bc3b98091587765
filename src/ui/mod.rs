pub mod header;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod stats_pane;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::AppState;
use header::{render_footer, render_header};
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_delete_modal;
use ratatui::{widgets::Block, Frame};
use stats_pane::{render_about_pane, render_stats_pane};
use styles::default_style;
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI in the current theme
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Theme background for the whole frame
    f.render_widget(Block::default().style(default_style(app.theme)), size);

    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_timer_pane(f, app, layout.timer_area);
    render_tasks_pane(f, app, layout.tasks_area);
    render_stats_pane(f, app, layout.stats_area);
    render_about_pane(f, app, layout.about_area);
    render_keybindings(f, layout.keybindings_area, app.ui_mode, app.theme);
    render_footer(f, app, layout.footer_area);

    render_delete_modal(f, app, size);
}
