use super::*;

pub fn render_manager_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4), // Team cards
            Constraint::Length(1), // Fetch error, if any
            Constraint::Min(6),    // Review queues
            Constraint::Length(4), // Controls (2 rows)
        ])
        .split(body);

    render_cards(frame, chunks[0], app);
    if let Some(error) = super::view_error_line(app, View::ManagerHome) {
        frame.render_widget(Paragraph::new(error), chunks[1]);
    }
    render_queues(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(
        frame,
        cards[0],
        " Working now ",
        format!("{}", app.team_in_progress),
        "clocked in without a clock-out",
        Color::Green,
    );
    render_card(
        frame,
        cards[1],
        " Completed this month ",
        format!("{}", app.team_completed_month),
        "full workdays across the team",
        Color::White,
    );
    render_card(
        frame,
        cards[2],
        " Awaiting review ",
        format!(
            "{} timesheets, {} leaves",
            app.pending_timesheets.len(),
            app.pending_leaves.len()
        ),
        "approve with A, reject with X",
        Color::Yellow,
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    detail: &str,
    color: Color,
) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title.to_string())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(card, area);
}

fn render_queues(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_timesheet_queue(frame, halves[0], app);
    render_leave_queue(frame, halves[1], app);
}

fn render_timesheet_queue(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.manager_queue == ManagerQueue::Timesheets;
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .pending_timesheets
        .iter()
        .enumerate()
        .filter_map(|(pos, &idx)| {
            let record = app.team_records.get(idx)?;
            let range = format!(
                "{} - {}",
                format_clock_time(record.clock_in),
                format_clock_time(record.clock_out)
            );
            let text = format!(
                "{:<16} {:<12} {:<14} [{}]",
                record.user.name,
                format_date(to_local_time(record.date).date()),
                range,
                format_hours(record.total_hours)
            );
            let style = if focused && pos == app.timesheet_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Some(ListItem::new(text).style(style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Timesheets ({} pending) ", app.pending_timesheets.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);

    if app.pending_timesheets.is_empty() {
        render_empty_hint(frame, area, "Nothing waiting for sign-off");
    }
}

fn render_leave_queue(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.manager_queue == ManagerQueue::Leaves;
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .pending_leaves
        .iter()
        .enumerate()
        .filter_map(|(pos, &idx)| {
            let leave = app.review_leaves.get(idx)?;
            let text = format!(
                "{:<16} {:<14} {} to {} [{:>2}d]",
                leave.user.name,
                leave.leave_type.label(),
                format_date(leave.start_date.date()),
                format_date(leave.end_date.date()),
                leave.days()
            );
            let style = if focused && pos == app.leave_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Some(ListItem::new(text).style(style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Leave requests ({} pending) ", app.pending_leaves.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);

    if app.pending_leaves.is_empty() {
        render_empty_hint(frame, area, "No leave waiting for review");
    }
}

fn render_empty_hint(frame: &mut Frame, area: Rect, text: &str) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y + area.height / 2,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Switch queue  "),
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("A", Style::default().fg(Color::Yellow)),
        Span::raw(": Approve  "),
        Span::styled("X", Style::default().fg(Color::Yellow)),
        Span::raw(": Reject"),
    ];
    let line2 = vec![
        Span::styled("P", Style::default().fg(Color::Yellow)),
        Span::raw(": Payrolls  "),
        Span::styled("V", Style::default().fg(Color::Yellow)),
        Span::raw(": Leave review  "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(": Reports  "),
        Span::styled("Shift+R", Style::default().fg(Color::Yellow)),
        Span::raw(": Refresh  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(vec![Line::from(line1), Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
