use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use super::theme::Theme;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();

    // Fill background with theme color
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry bar
            Constraint::Min(1),    // Todo list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_entry_bar(f, app, chunks[0], theme);
    draw_todo_list(f, app, chunks[1], theme);
    draw_status_bar(f, app, chunks[2], theme);
}

/// Draw the draft entry bar
fn draw_entry_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let appearance = &app.config().appearance;

    let entry_text = if app.draft().is_empty() {
        format!("{}{}", appearance.prompt, appearance.entry_hint)
    } else {
        format!("{}{}", appearance.prompt, app.draft())
    };

    let style = if app.draft().is_empty() {
        Style::default().fg(theme.dimmed).bg(theme.background)
    } else {
        Style::default().fg(theme.foreground).bg(theme.background)
    };

    let border_color = if app.is_entry_focused() {
        theme.accent
    } else {
        theme.dimmed
    };

    // The add affordance mirrors the original's button: visible always,
    // dimmed while the trimmed draft is empty
    let add_hint = Line::from(Span::styled(
        " Enter: add ",
        if app.can_add() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.dimmed)
        },
    ))
    .right_aligned();

    let entry = Paragraph::new(entry_text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(appearance.title.clone())
            .title(add_hint)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(entry, area);

    // Show cursor at the end of the draft while the entry bar is focused
    if app.is_entry_focused() {
        let prefix_width = appearance.prompt.width() + app.draft().width();
        let cursor_x = area.x + 1 + prefix_width as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Draw the list of items, or the placeholder when there are none
fn draw_todo_list(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let appearance = &app.config().appearance;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed))
        .style(Style::default().bg(theme.background));

    if app.todos().is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(Span::styled(
                appearance.empty_title.clone(),
                Style::default().fg(theme.foreground),
            )),
            Line::from(Span::styled(
                appearance.empty_hint.clone(),
                Style::default().fg(theme.dimmed),
            )),
        ])
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let selected = app.selected_index();
    let height = area.height.saturating_sub(2) as usize; // inside borders
    let range = visible_range(selected, app.todos().len(), height);
    let offset = range.start;

    let items: Vec<ListItem> = app.todos().items()[range]
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = offset + i == selected;

            let row_style = if is_selected {
                Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
            } else {
                Style::default().fg(theme.foreground)
            };

            let mark = if item.completed {
                Span::styled(
                    appearance.checked_mark.clone(),
                    row_style.patch(Style::default().fg(theme.accent)),
                )
            } else {
                Span::styled(appearance.unchecked_mark.clone(), row_style)
            };

            let text = if item.completed {
                Span::styled(
                    item.text.clone(),
                    row_style
                        .patch(Style::default().fg(theme.done))
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                Span::styled(item.text.clone(), row_style)
            };

            // Per-row delete affordance, acted on via d/Delete
            let delete_mark =
                Span::styled(" ✗", row_style.patch(Style::default().fg(theme.danger)));

            ListItem::new(Line::from(vec![mark, text, delete_mark]))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Window of the list that keeps the selected row visible
fn visible_range(selected: usize, total: usize, height: usize) -> std::ops::Range<usize> {
    if height == 0 || total == 0 {
        return 0..0;
    }
    let start = (selected + 1).saturating_sub(height);
    let end = (start + height).min(total);
    start..end
}

/// Draw the status bar with key hints for the current focus
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let total = app.todos().len();
    let done = app
        .todos()
        .items()
        .iter()
        .filter(|item| item.completed)
        .count();

    let dimmed = Style::default().fg(theme.dimmed).bg(theme.background);

    let status = if app.is_entry_focused() {
        let add_style = if app.can_add() {
            Style::default().fg(theme.accent).bg(theme.background)
        } else {
            dimmed
        };
        Line::from(vec![
            Span::styled(" Enter/Ctrl+A: add", add_style),
            Span::styled(
                format!(" | Tab: list | Ctrl+C: quit | {}/{} done", done, total),
                dimmed,
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!(
                " {}/{} | j/k: nav | Space: toggle | d: delete | i: new task | q: quit",
                (app.selected_index() + 1).min(total),
                total
            ),
            dimmed,
        ))
    };

    f.render_widget(Paragraph::new(status), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_fits() {
        assert_eq!(visible_range(0, 3, 10), 0..3);
        assert_eq!(visible_range(2, 3, 10), 0..3);
    }

    #[test]
    fn test_visible_range_scrolls_to_selection() {
        // Ten items, five rows: selection below the window pulls it down
        assert_eq!(visible_range(0, 10, 5), 0..5);
        assert_eq!(visible_range(4, 10, 5), 0..5);
        assert_eq!(visible_range(5, 10, 5), 1..6);
        assert_eq!(visible_range(9, 10, 5), 5..10);
    }

    #[test]
    fn test_visible_range_degenerate() {
        assert_eq!(visible_range(0, 0, 5), 0..0);
        assert_eq!(visible_range(3, 10, 0), 0..0);
    }
}
