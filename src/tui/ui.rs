use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

/// Display columns per grid cell
pub const CELL_WIDTH: usize = 6;

/// Search icon shown before the query, with its surrounding spaces
const SEARCH_PREFIX: &str = " \u{1F50E} ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        area,
    );

    draw_search_bar(frame, app, chunks[0]);
    draw_grid(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.search.focused {
        let prefix = unicode_width::UnicodeWidthStr::width(SEARCH_PREFIX) as u16;
        let cursor_x = chunks[0].x + 1 + prefix + app.search.cursor_column() as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::border(app.search.focused)))
        .title(" emoji+ ");

    let query = if app.search.query.is_empty() && !app.search.focused {
        Span::styled("Search", Style::default().fg(colors::TEXT_DIM))
    } else {
        Span::styled(app.search.query.as_str(), Style::default().fg(colors::TEXT))
    };

    let line = Line::from(vec![Span::raw(SEARCH_PREFIX), query]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::border(!app.search.focused)))
        .title(format!(" {} emoji ", app.results.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.results.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No matches",
            Style::default().fg(colors::TEXT_DIM),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let grid = app.grid;
    let total = app.results.len();
    app.selection.visible_rows = (inner.height as usize).max(1);
    app.selection.ensure_visible(&grid);

    let first = app.selection.scroll_row;
    let last = (first + app.selection.visible_rows).min(grid.rows(total));

    let lines: Vec<Line> = (first..last)
        .map(|row| {
            let spans: Vec<Span> = grid
                .row_span(row, total)
                .filter_map(|idx| {
                    let entry = app.catalog.get(app.results[idx])?;
                    let bg = if app.selection.selected == Some(idx) {
                        colors::ACCENT
                    } else {
                        colors::SURFACE
                    };
                    Some(Span::styled(
                        pad_cell(entry.character),
                        Style::default().fg(colors::TEXT).bg(bg),
                    ))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.selected_entry() {
        Some(entry) if !app.search.focused => format!(
            " {}  {}  |  {}  |  Enter copy  / search  Esc quit",
            entry.code_label(),
            entry.name,
            app.status_message
        ),
        _ => format!(" {}  |  Tab grid  Esc clear/quit", app.status_message),
    };
    let bar = Paragraph::new(text).style(Style::default().fg(colors::TEXT_DIM).bg(colors::SURFACE));
    frame.render_widget(bar, area);
}

/// Center a glyph in a fixed-width cell, accounting for wide characters
pub fn pad_cell(c: char) -> String {
    let width = c.width().unwrap_or(1).min(CELL_WIDTH);
    let left = (CELL_WIDTH - width) / 2;
    let right = CELL_WIDTH - width - left;
    format!("{}{}{}", " ".repeat(left), c, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn cells_have_constant_width() {
        for c in ['\u{1F600}', '\u{1F1E6}', 'a', '\u{1F680}'] {
            assert_eq!(pad_cell(c).width(), CELL_WIDTH, "cell for {:?}", c);
        }
    }

    #[test]
    fn wide_glyph_is_centered() {
        assert_eq!(pad_cell('\u{1F600}'), "  \u{1F600}  ");
    }
}
