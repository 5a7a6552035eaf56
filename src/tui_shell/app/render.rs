use super::*;

use super::bindings::mode_hints;

const ACTIVITY_ROWS: u16 = 7;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(cols[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(ACTIVITY_ROWS + 2)])
        .split(cols[1]);

    draw_projects(frame, app, left[0]);
    draw_collections(frame, app, left[1]);
    draw_tree(frame, app, left[2]);
    draw_details(frame, app, right[0]);
    draw_activity(frame, app, right[1]);
    draw_status(frame, app, rows[1]);

    if let Some(builder) = &app.query {
        dim_frame(frame);
        modal::draw_query_builder(
            frame,
            builder,
            app.theme.selected_line,
            app.theme.active_border,
        );
    }
    if app.log_open {
        dim_frame(frame);
        draw_log(frame, app);
    }
    if let Some(help) = &app.help {
        dim_frame(frame);
        draw_help(frame, app, help);
    }
}

/// Bordered panel block; the focused panel gets the active border and the
/// filter (committed or being typed) shows along the bottom edge.
fn panel_block(app: &App, panel: Panel, title: String) -> Block<'static> {
    let border = if app.focus.is(panel) {
        app.theme.active_border
    } else {
        app.theme.inactive_border
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);
    let filter = app.filters.active_text(panel);
    let editing = app.filters.editing_panel() == Some(panel);
    if editing || !filter.is_empty() {
        let style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            app.theme.options_text
        };
        block = block.title_bottom(Line::from(Span::styled(format!("/{}", filter), style)));
    }
    block
}

fn place_filter_cursor(frame: &mut ratatui::Frame, app: &App, panel: Panel, rect: Rect) {
    if app.filters.editing_panel() != Some(panel) || app.mode() != Mode::FilterInput {
        return;
    }
    if let Some(input) = app.filters.input() {
        let x = rect.x + 2 + input.cursor as u16;
        let y = rect.y + rect.height.saturating_sub(1);
        frame.set_cursor_position((x.min(rect.right().saturating_sub(1)), y));
    }
}

fn render_list(
    frame: &mut ratatui::Frame,
    app: &App,
    panel: Panel,
    rect: Rect,
    block: Block<'static>,
    items: Vec<ListItem<'_>>,
    cursor: usize,
) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(cursor));
    }
    let highlight = if app.focus.is(panel) {
        app.theme.selected_line
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    frame.render_stateful_widget(list, rect, &mut state);
    place_filter_cursor(frame, app, panel, rect);
}

fn placeholder(text: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    )))
}

fn draw_projects(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let view = app.project_view();
    let mut items: Vec<ListItem> = view
        .iter()
        .map(|p| {
            let current = app.project.as_deref() == Some(p.id.as_str());
            let style = if current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut lines = vec![Line::from(Span::styled(
                format!("{}{}", app.icons.project, p.label()),
                style,
            ))];
            if let (Some(id), DetailsContent::Project(d)) = (&app.project_expanded, &app.details) {
                if *id == p.id && d.id == p.id {
                    let dim = Style::default().fg(Color::Gray);
                    lines.push(Line::from(Span::styled(format!("  id: {}", d.id), dim)));
                    for (key, value) in [("number", &d.number), ("state", &d.state)] {
                        if !value.is_empty() {
                            let text = format!("  {}: {}", key, value);
                            lines.push(Line::from(Span::styled(text, dim)));
                        }
                    }
                }
            }
            ListItem::new(lines)
        })
        .collect();
    if items.is_empty() {
        items.push(placeholder(if app.projects_loading {
            "Loading..."
        } else {
            "No projects"
        }));
    }
    let title = format!("{} ({})", Panel::Projects.title(), view.len());
    let block = panel_block(app, Panel::Projects, title);
    render_list(frame, app, Panel::Projects, rect, block, items, app.projects_idx);
}

fn draw_collections(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let view = app.collection_view();
    let mut items: Vec<ListItem> = view
        .iter()
        .map(|c| {
            let current = app.collection.as_deref() == Some(c.path.as_str());
            let style = if current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", app.icons.collection, c.name),
                style,
            )))
        })
        .collect();
    if items.is_empty() {
        items.push(placeholder(if app.project.is_some() {
            "No collections"
        } else {
            "Select a project"
        }));
    }
    let title = format!("{} ({})", Panel::Collections.title(), view.len());
    let block = panel_block(app, Panel::Collections, title);
    render_list(
        frame,
        app,
        Panel::Collections,
        rect,
        block,
        items,
        app.collections_idx,
    );
}

fn tree_line<'a>(app: &'a App, node: &'a Node, selected: bool) -> Line<'a> {
    let indent = "  ".repeat(node.depth);
    let toggle = match (node.has_children, node.expanded) {
        (_, true) => app.icons.expanded,
        (true, false) => app.icons.collapsed,
        (false, false) => "  ",
    };
    let icon = match node.kind {
        NodeKind::Collection => app.icons.collection,
        NodeKind::Document => app.icons.document,
    };
    let name_style = match node.kind {
        NodeKind::Collection => Style::default().fg(Color::Cyan),
        NodeKind::Document => Style::default(),
    };
    let mark = if selected {
        Span::styled("● ", Style::default().fg(Color::Green))
    } else if app.selection.is_active() {
        Span::raw("  ")
    } else {
        Span::raw("")
    };
    Line::from(vec![
        mark,
        Span::raw(indent),
        Span::raw(toggle),
        Span::raw(icon),
        Span::styled(node.name.as_str(), name_style),
    ])
}

fn draw_tree(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let view = app.tree_view();
    let mut items: Vec<ListItem> = view
        .iter()
        .enumerate()
        .map(|(i, n)| ListItem::new(tree_line(app, n, app.selection.contains(i))))
        .collect();
    if items.is_empty() {
        items.push(placeholder(if app.tree_loading {
            "Loading..."
        } else {
            "Select a collection"
        }));
    }
    let mut title = match &app.collection {
        Some(c) => format!("{} {}", Panel::Tree.title(), c),
        None => Panel::Tree.title().to_string(),
    };
    if app.selection.is_active() {
        title.push_str(&format!(" [{} selected]", app.selection.selected().len()));
    }
    let block = panel_block(app, Panel::Tree, title);
    render_list(frame, app, Panel::Tree, rect, block, items, app.tree_idx);
}

fn draw_details(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let lines: Vec<Line> = app
        .details_lines()
        .into_iter()
        .map(|l| {
            if l.error {
                Line::from(Span::styled(l.text, Style::default().fg(Color::Red)))
            } else {
                Line::from(l.text)
            }
        })
        .collect();
    let block = panel_block(app, Panel::Details, app.details_title());
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.details_scroll as u16, 0)),
        rect,
    );
    place_filter_cursor(frame, app, Panel::Details, rect);
}

fn status_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Running => Color::Yellow,
        ActivityStatus::Success => Color::Green,
        ActivityStatus::Error => Color::Red,
    }
}

fn activity_line(entry: &ActivityEntry) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{} ", fmt_ts_clock(&entry.ts)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:<12}", entry.label),
            Style::default().fg(status_color(entry.status)),
        ),
        Span::raw(entry.description.as_str()),
    ])
}

fn draw_activity(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let rows = rect.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = app.activity.entries().rev().take(rows).map(activity_line).collect();
    lines.reverse();
    let mut title = "Activity".to_string();
    if app.bridge.in_flight() > 0 {
        title.push_str(&format!(" ({} running)", app.bridge.in_flight()));
    }
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.inactive_border)
                .title(title),
        ),
        rect,
    );
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, rect: Rect) {
    let mut spans = vec![Span::styled(mode_hints(app.mode()), app.theme.options_text)];
    if let Some(last) = app.activity.last() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            last.description.as_str(),
            Style::default().fg(status_color(last.status)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
}

fn draw_help(frame: &mut ratatui::Frame, app: &App, help: &HelpPopup<Handler>) {
    let lines: Vec<Line> = help
        .items
        .iter()
        .map(|item| {
            if item.is_header() {
                Line::from(Span::styled(
                    item.label,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("  {:<8}", item.key), app.theme.options_text),
                    Span::raw(item.label),
                ])
            }
        })
        .collect();
    modal::draw_list(
        frame,
        "Keys",
        &["Enter run", "Esc"],
        lines,
        Some(help.selected),
        app.theme.selected_line,
        app.theme.active_border,
    );
}

fn draw_log(frame: &mut ratatui::Frame, app: &App) {
    let lines: Vec<Line> = app.activity.entries().map(activity_line).collect();
    let selected = (!lines.is_empty()).then_some(app.log_scroll);
    modal::draw_list(
        frame,
        "Command log",
        &["j/k", "Esc"],
        lines,
        selected,
        app.theme.selected_line,
        app.theme.active_border,
    );
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
