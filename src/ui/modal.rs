use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{danger_style, modal_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the "Delete this task?" confirmation
pub fn render_delete_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::ConfirmDelete {
        return;
    }
    let Some(task) = app.pending_delete.and_then(|id| app.tasks.get(id)) else {
        return;
    };

    let theme = app.theme;
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  \"{}\"", task.text)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", danger_style(theme)),
            Span::raw(" Delete  "),
            Span::styled("[n]", title_style(theme)),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Delete this task? ", danger_style(theme)))
                .style(modal_style(theme)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
