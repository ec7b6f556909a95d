use super::*;

pub fn render_employee_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4), // Today / month / leave cards
            Constraint::Min(5),    // Attendance history
            Constraint::Length(7), // My leave requests
            Constraint::Length(4), // Controls (2 rows)
        ])
        .split(body);

    render_cards(frame, chunks[0], app);
    render_history(frame, chunks[1], app);
    render_my_leaves(frame, chunks[2], app);
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

    let status_color = match app.today_status {
        AttendanceStatus::ClockedIn => Color::Green,
        AttendanceStatus::OnBreak => Color::Yellow,
        AttendanceStatus::ClockedOut => Color::Cyan,
        AttendanceStatus::Idle => Color::DarkGray,
    };
    let today = Paragraph::new(vec![
        Line::from(Span::styled(
            app.today_status.label(),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} worked", format_hours(app.today_hours)),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" Today "));
    frame.render_widget(today, cards[0]);

    let month = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{}%", app.month_rate),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" attendance", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!(
                "{} of {} workdays present",
                app.month_present_days, app.month_workdays
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" This month "));
    frame.render_widget(month, cards[1]);

    let counts = app.my_leave_counts;
    let leave = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{} pending", counts.pending),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} approved, {} rejected", counts.approved, counts.rejected),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" My leave "));
    frame.render_widget(leave, cards[2]);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn render_history(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Attendance ({} days) ", app.my_records.len()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = super::view_error_line(app, View::EmployeeHome) {
        lines.push(error);
    }

    if app.my_records.is_empty() && lines.is_empty() {
        frame.render_widget(
            Paragraph::new("No attendance on file")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    for record in &app.my_records {
        lines.push(attendance_line(record));
    }

    let total_rows = lines.len();
    let max_rows = inner.height as usize;
    if max_rows < total_rows && app.my_history_scroll > total_rows - max_rows {
        app.my_history_scroll = total_rows - max_rows;
    }
    if total_rows <= max_rows {
        app.my_history_scroll = 0;
    }

    frame.render_widget(
        Paragraph::new(lines).scroll((app.my_history_scroll as u16, 0)),
        inner,
    );

    if total_rows > max_rows {
        let mut scrollbar_state = ScrollbarState::new(total_rows)
            .position(app.my_history_scroll)
            .viewport_content_length(max_rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
            &mut scrollbar_state,
        );
    }
}

fn attendance_line(record: &hrtrack::domain::AttendanceRecord) -> Line<'static> {
    let date = format_date(to_local_time(record.date).date());
    let range = format!(
        "{} - {}",
        format_clock_time(record.clock_in),
        format_clock_time(record.clock_out)
    );

    let mut spans = vec![
        Span::styled(format!("{:<12}", date), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<14}", range), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("[{}]", format_hours(record.total_hours)),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<12}", presence_label(record)),
            Style::default().fg(Color::Gray),
        ),
        super::approval_span(record.approval),
    ];

    if !record.breaks.is_empty() {
        spans.push(Span::styled(
            format!("  {} break(s)", record.breaks.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn render_my_leaves(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" My leave requests ({}) ", app.my_leaves.len()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.my_leaves.is_empty() {
        frame.render_widget(
            Paragraph::new("No leave requested")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .my_leaves
        .iter()
        .take(inner.height as usize)
        .map(|leave| {
            let range = format!(
                "{} to {}",
                format_date(leave.start_date.date()),
                format_date(leave.end_date.date())
            );
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", leave.leave_type.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!("{:<26}", range), Style::default().fg(Color::White)),
                Span::styled(
                    format!("[{:>2}d] ", leave.days()),
                    Style::default().fg(Color::Magenta),
                ),
                super::leave_status_span(leave.status),
                Span::styled(
                    format!("  {}", truncate(&leave.reason, 32)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}[...]", cut)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = vec![
        Span::styled("I", Style::default().fg(Color::Yellow)),
        Span::raw(": Clock in  "),
        Span::styled("O", Style::default().fg(Color::Yellow)),
        Span::raw(": Clock out  "),
        Span::styled("B", Style::default().fg(Color::Yellow)),
        Span::raw(": Start/end break  "),
        Span::styled("L", Style::default().fg(Color::Yellow)),
        Span::raw(": Request leave"),
    ];
    let line2 = vec![
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Scroll  "),
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
