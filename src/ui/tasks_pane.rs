use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, done_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const INPUT_PLACEHOLDER: &str = "Add a task (e.g., Read one chapter)";
const EMPTY_LIST: &str = "No tasks ✔ Add one to start";

/// Render the task card: input line and checklist
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Tasks ", title_style(theme)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // List
        ])
        .split(inner);

    f.render_widget(Paragraph::new(input_line(app)), rows[0]);

    if app.tasks.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(EMPTY_LIST, hint_style(theme))),
            rows[2],
        );
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|task| {
            let checkbox = if task.done { "[x] " } else { "[ ] " };
            let editing = app.editing.as_ref().filter(|e| e.task_id == task.id);

            let line = match editing {
                Some(edit) => Line::from(vec![
                    Span::raw(checkbox),
                    Span::styled(edit.buffer.clone(), title_style(theme)),
                    Span::styled("█", title_style(theme)),
                    Span::styled("  Enter save · Esc cancel", hint_style(theme)),
                ]),
                None if task.done => Line::from(vec![
                    Span::raw(checkbox),
                    Span::styled(task.text.clone(), done_style(theme)),
                ]),
                None => Line::from(vec![Span::raw(checkbox), Span::raw(task.text.clone())]),
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(selected_style(theme));
    let mut state = ListState::default();
    if app.ui_mode != UiMode::AddingTask {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, rows[2], &mut state);
}

/// The "> ..." input line, with a cursor while it has focus
fn input_line(app: &AppState) -> Line<'static> {
    let theme = app.theme;
    let focused = app.ui_mode == UiMode::AddingTask;

    let mut spans = vec![Span::styled("> ", title_style(theme))];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(INPUT_PLACEHOLDER, hint_style(theme)));
    } else {
        spans.push(Span::raw(app.input.clone()));
    }
    if focused {
        spans.push(Span::styled("█", title_style(theme)));
        spans.push(Span::styled("  Enter add · Esc done", hint_style(theme)));
    } else {
        spans.push(Span::styled("  [a] add", hint_style(theme)));
    }
    Line::from(spans)
}
