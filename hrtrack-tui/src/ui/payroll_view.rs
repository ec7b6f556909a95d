use super::*;
use hrtrack::domain::PayrollEntry;

pub fn render_payroll_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Entries
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_entries(frame, chunks[0], app);
    render_controls(frame, chunks[1]);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = if app.payrolls.is_empty() {
        " Payroll history ".to_string()
    } else {
        format!(
            " Payroll history ({} entries, ${:.2} all time) ",
            app.payrolls.len(),
            app.payroll_grand_total
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = super::view_error_line(app, View::Payrolls) {
        lines.push(error);
    }

    if app.payrolls.is_empty() {
        if lines.is_empty() {
            frame.render_widget(
                Paragraph::new("No payroll entries yet")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                inner,
            );
        } else {
            frame.render_widget(Paragraph::new(lines), inner);
        }
        return;
    }

    lines.push(header_line());
    for entry in &app.payrolls {
        lines.push(payroll_line(entry));
    }

    let total_rows = lines.len();
    let max_rows = inner.height as usize;
    if max_rows < total_rows && app.payroll_scroll > total_rows - max_rows {
        app.payroll_scroll = total_rows - max_rows;
    }
    if total_rows <= max_rows {
        app.payroll_scroll = 0;
    }

    frame.render_widget(
        Paragraph::new(lines).scroll((app.payroll_scroll as u16, 0)),
        inner,
    );

    if total_rows > max_rows {
        let mut scrollbar_state = ScrollbarState::new(total_rows)
            .position(app.payroll_scroll)
            .viewport_content_length(max_rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
            &mut scrollbar_state,
        );
    }
}

pub(super) fn header_line() -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{:<18} {:<8} {:>7} {:>6} {:>7} {:>10} {:>11}  {}",
            "Employee", "Month", "Hours", "OT", "Unpaid", "Deduct", "Total", "Status"
        ),
        Style::default().fg(Color::DarkGray),
    ))
}

pub(super) fn payroll_line(entry: &PayrollEntry) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<18}", entry.user.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" {:<8}", entry.month),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" {:>7.1}", entry.total_hours),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" {:>6.1}", entry.overtime_hours),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" {:>7}", entry.unpaid_leave_days),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" {:>10}", format!("-${:.2}", entry.deductions)),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!(" {:>11}", format!("${:.2}", entry.total_pay)),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        super::payroll_status_span(entry.status),
    ])
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls_text = vec![
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Scroll  "),
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
