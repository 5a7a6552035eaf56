use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::query::{Cell, GridRow};

use super::query_builder::{BuilderState, QueryBuilder};

/// Box centered in `area`, `w` x `h` clamped to what fits.
pub(in crate::tui_shell) fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Standard modal frame: most of the screen, capped.
pub(in crate::tui_shell) fn modal_area(area: Rect) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    centered(area, w, h)
}

fn modal_title(title: &str, keys: &[&str]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    for key in keys {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

/// Clears `box_area`, draws the bordered frame and returns the inner area.
fn open_box(frame: &mut ratatui::Frame, box_area: Rect, title: Line<'static>, border: Style) -> Rect {
    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    inner
}

/// Scrollable list of lines; `selected` is kept in view and highlighted.
pub(in crate::tui_shell) fn draw_list(
    frame: &mut ratatui::Frame,
    title: &str,
    keys: &[&str],
    lines: Vec<Line<'_>>,
    selected: Option<usize>,
    highlight: Style,
    border: Style,
) {
    let box_area = modal_area(frame.area());
    let inner = open_box(frame, box_area, modal_title(title, keys), border);

    let height = inner.height as usize;
    let focus = selected.unwrap_or(0);
    let scroll = focus.saturating_sub(height.saturating_sub(1));
    let lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if Some(i) == selected {
                l.patch_style(highlight)
            } else {
                l
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0)),
        inner,
    );
}

fn cell_style(builder: &QueryBuilder, cell: Cell, highlight: Style) -> Style {
    if builder.draft.active_cell() == cell {
        highlight
    } else {
        Style::default()
    }
}

fn cell_span(builder: &QueryBuilder, cell: Cell, width: usize, highlight: Style) -> Span<'static> {
    let text = match &builder.state {
        BuilderState::FieldEdit { cell: editing, input } if *editing == cell => {
            format!("{}_", input.buf)
        }
        _ => builder.draft.cell_text(cell),
    };
    let text = if text.is_empty() && cell.is_text() {
        "…".to_string()
    } else {
        text
    };
    Span::styled(
        format!("[{:<width$}]", text, width = width),
        cell_style(builder, cell, highlight),
    )
}

/// Query builder grid: one line per filter, then order by, limit and buttons.
pub(in crate::tui_shell) fn draw_query_builder(
    frame: &mut ratatui::Frame,
    builder: &QueryBuilder,
    highlight: Style,
    border: Style,
) {
    let box_area = modal_area(frame.area());
    let title = format!("Query {}", builder.draft.collection_path);
    let inner = open_box(
        frame,
        box_area,
        modal_title(&title, &["Enter", "a add", "d delete", "Esc"]),
        border,
    );

    let label = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();
    if builder.draft.filters.is_empty() {
        lines.push(Line::from(Span::styled(
            "No filters. Press a to add one.",
            label.add_modifier(Modifier::DIM),
        )));
    }
    for row in 0..builder.draft.row_count() {
        let spans = match builder.draft.row_at(row) {
            GridRow::Filter(i) => vec![
                Span::styled(format!("where {:<2} ", i + 1), label),
                cell_span(builder, Cell::Field(i), 16, highlight),
                Span::raw(" "),
                cell_span(builder, Cell::Operator(i), 18, highlight),
                Span::raw(" "),
                cell_span(builder, Cell::ValueType(i), 7, highlight),
                Span::raw(" "),
                cell_span(builder, Cell::Value(i), 16, highlight),
            ],
            GridRow::OrderBy => vec![
                Span::styled("order by ", label),
                cell_span(builder, Cell::OrderField, 16, highlight),
                Span::raw(" "),
                cell_span(builder, Cell::OrderDir, 4, highlight),
            ],
            GridRow::Limit => vec![
                Span::styled("limit    ", label),
                cell_span(builder, Cell::Limit, 6, highlight),
            ],
            GridRow::Buttons => vec![
                Span::raw("         "),
                Span::styled(" Execute ", cell_style(builder, Cell::Execute, highlight)),
                Span::raw("  "),
                Span::styled(" Clear ", cell_style(builder, Cell::Clear, highlight)),
            ],
        };
        if matches!(builder.draft.row_at(row), GridRow::OrderBy) {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((choices, highlighted)) = builder.popup() {
        draw_option_popup(frame, inner, choices, highlighted, highlight, border);
    }
}

fn draw_option_popup(
    frame: &mut ratatui::Frame,
    anchor: Rect,
    choices: &[&str],
    highlighted: usize,
    highlight: Style,
    border: Style,
) {
    let width = choices.iter().map(|c| c.len()).max().unwrap_or(0) as u16 + 4;
    let height = choices.len() as u16 + 2;
    let box_area = centered(anchor, width, height);
    let inner = open_box(frame, box_area, Line::from(""), border);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(choices.iter().map(|_| Constraint::Length(1)))
        .split(inner);
    for (i, (choice, rect)) in choices.iter().zip(parts.iter()).enumerate() {
        let style = if i == highlighted {
            highlight
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Span::styled(*choice, style)), *rect);
    }
}
