use super::*;

pub fn render_leave_review_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Request list
            Constraint::Length(6), // Selected request details
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_list(frame, chunks[0], app);
    render_details(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let pending = app
        .review_leaves
        .iter()
        .filter(|l| l.status == LeaveStatus::Pending)
        .count();

    let items: Vec<ListItem> = app
        .review_leaves
        .iter()
        .enumerate()
        .map(|(i, leave)| {
            let range = format!(
                "{} to {}",
                format_date(leave.start_date.date()),
                format_date(leave.end_date.date())
            );
            if i == app.review_index {
                let text = format!(
                    "{:<16} {:<14} {:<26} [{:>2}d] {}",
                    leave.user.name,
                    leave.leave_type.label(),
                    range,
                    leave.days(),
                    status_label(leave.status)
                );
                ListItem::new(text).style(Style::default().fg(Color::Yellow))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<16} ", leave.user.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:<14} ", leave.leave_type.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!("{:<26} ", range), Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("[{:>2}d] ", leave.days()),
                        Style::default().fg(Color::Magenta),
                    ),
                    super::leave_status_span(leave.status),
                ]))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Leave requests ({}, {} pending) ",
                app.review_leaves.len(),
                pending
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);

    if let Some(error) = super::view_error_line(app, View::LeaveReview) {
        let row = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(Paragraph::new(error), row);
    } else if app.review_leaves.is_empty() {
        let row = Rect {
            x: area.x + 2,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new("No leave requests on file")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            row,
        );
    }
}

fn status_label(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "Pending",
        LeaveStatus::Approved => "Approved",
        LeaveStatus::Rejected => "Rejected",
    }
}

fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Details ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(leave) = app.selected_review_leave() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                leave.user.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", leave.leave_type.label()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} to {}  ({} days)",
                format_date(leave.start_date.date()),
                format_date(leave.end_date.date()),
                leave.days()
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            leave.reason.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!(
                    "requested {}  ",
                    format_date(to_local_time(leave.created_at).date())
                ),
                Style::default().fg(Color::DarkGray),
            ),
            super::leave_status_span(leave.status),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls_text = vec![
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("A", Style::default().fg(Color::Yellow)),
        Span::raw(": Approve  "),
        Span::styled("X", Style::default().fg(Color::Yellow)),
        Span::raw(": Reject  "),
        Span::styled("Shift+R", Style::default().fg(Color::Yellow)),
        Span::raw(": Refresh  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Back  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
