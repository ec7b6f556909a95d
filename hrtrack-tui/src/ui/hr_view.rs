use super::*;

pub fn render_hr_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4), // Company cards
            Constraint::Length(1), // Fetch error, if any
            Constraint::Length(5), // Latest payroll batch
            Constraint::Min(4),    // Recent leave requests
            Constraint::Length(4), // Controls (2 rows)
        ])
        .split(body);

    render_cards(frame, chunks[0], app);
    if let Some(error) = super::view_error_line(app, View::HrHome) {
        frame.render_widget(Paragraph::new(error), chunks[1]);
    }
    render_latest_batch(frame, chunks[2], app);
    render_company_leave(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
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

    let staff = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}", app.employees.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "people in the directory",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" Staff "));
    frame.render_widget(staff, cards[0]);

    let pending = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}", app.leave_counts.pending),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("of {} leave requests open", app.leave_counts.total()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" Pending leave "));
    frame.render_widget(pending, cards[1]);

    let payroll = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("${:.2}", app.payroll_grand_total),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "paid out across all batches",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(card_block(" Payroll to date "));
    frame.render_widget(payroll, cards[2]);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn render_latest_batch(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Latest payroll batch ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // `None` means no payroll was ever generated, not a batch of zero.
    let Some(batch) = &app.latest_batch else {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "No payrolls processed yet",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(vec![
                    Span::styled("G", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        " starts a run for the current month",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ]),
            inner,
        );
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                batch.month.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} entries)", batch.entries),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("${:.2}", batch.total_amount),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(
                    "  processed {}",
                    format_date(to_local_time(batch.processed_on).date())
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_company_leave(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Company leave ({} requests) ", app.all_leaves.len()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.all_leaves.is_empty() {
        frame.render_widget(
            Paragraph::new("No leave requests on file")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .all_leaves
        .iter()
        .take(inner.height as usize)
        .map(|leave| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", leave.user.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<14}", leave.leave_type.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(
                        "{} to {} ",
                        format_date(leave.start_date.date()),
                        format_date(leave.end_date.date())
                    ),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("[{:>2}d] ", leave.days()),
                    Style::default().fg(Color::Magenta),
                ),
                super::leave_status_span(leave.status),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = vec![
        Span::styled("G", Style::default().fg(Color::Yellow)),
        Span::raw(": Generate payroll  "),
        Span::styled("E", Style::default().fg(Color::Yellow)),
        Span::raw(": Employees  "),
        Span::styled("P", Style::default().fg(Color::Yellow)),
        Span::raw(": Payrolls  "),
        Span::styled("V", Style::default().fg(Color::Yellow)),
        Span::raw(": Leave review"),
    ];
    let line2 = vec![
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
