use super::*;

/// Slice colors, one per leave type, cycling if more ever show up.
const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

pub fn render_reports_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Tab bar + month
            Constraint::Min(0),    // Report content
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_tab_bar(frame, chunks[0], app);
    match app.report_tab {
        ReportTab::Attendance => render_attendance_tab(frame, chunks[1], app),
        ReportTab::Payroll => render_payroll_tab(frame, chunks[1], app),
        ReportTab::Leave => render_leave_tab(frame, chunks[1], app),
    }
    render_controls(frame, chunks[2]);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans: Vec<Span> = Vec::new();
    for tab in ReportTab::ALL {
        if tab == app.report_tab {
            tab_spans.push(Span::styled(
                format!("[{}]", tab.label()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        } else {
            tab_spans.push(Span::styled(
                format!(" {} ", tab.label()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        tab_spans.push(Span::raw("  "));
    }

    let month_line = Line::from(vec![
        Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.report_month_key(), Style::default().fg(Color::White)),
        Span::styled(" ›", Style::default().fg(Color::DarkGray)),
    ]);
    let month_width = month_line.width() as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(month_width)])
        .split(Rect { height: 1, ..area });

    frame.render_widget(Paragraph::new(Line::from(tab_spans)), cols[0]);
    frame.render_widget(Paragraph::new(month_line), cols[1]);
}

fn render_attendance_tab(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Attendance {} ", app.report_month_key()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = super::view_error_line(app, View::Reports) {
        lines.push(error);
    }

    if app.attendance_report_rows.is_empty() {
        if lines.is_empty() {
            render_no_data(frame, inner);
        } else {
            frame.render_widget(Paragraph::new(lines), inner);
        }
        return;
    }

    lines.push(Line::from(Span::styled(
        format!(
            "{:<20} {:>6} {:>8} {:>8} {:>8} {:>6}",
            "Employee", "Days", "Present", "Pending", "Hours", "Rate"
        ),
        Style::default().fg(Color::DarkGray),
    )));

    for row in app.attendance_report_rows.iter().take(inner.height as usize) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", row.user.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" {:>6} {:>8} {:>8}", row.total_days, row.present_days, row.pending_days),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {:>8.1}", row.total_hours),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!(" {:>5.0}%", row.attendance_rate),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_payroll_tab(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Payroll {} ", app.report_month_key()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = super::view_error_line(app, View::Reports) {
        lines.push(error);
    }

    if app.payroll_report_rows.is_empty() {
        if lines.is_empty() {
            render_no_data(frame, inner);
        } else {
            frame.render_widget(Paragraph::new(lines), inner);
        }
        return;
    }

    lines.push(super::payroll_view::header_line());
    for entry in app.payroll_report_rows.iter().take(inner.height as usize) {
        lines.push(super::payroll_view::payroll_line(entry));
    }

    let month_total: f64 = app.payroll_report_rows.iter().map(|e| e.total_pay).sum();
    lines.push(Line::from(Span::styled(
        format!("Month total: ${:.2}", month_total),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_leave_tab(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_leave_list(frame, halves[0], app);
    render_leave_pie(frame, halves[1], app);
}

fn render_leave_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Leave {} ", app.report_month_key()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = super::view_error_line(app, View::Reports) {
        lines.push(error);
    }

    if app.leave_report_rows.is_empty() {
        if lines.is_empty() {
            render_no_data(frame, inner);
        } else {
            frame.render_widget(Paragraph::new(lines), inner);
        }
        return;
    }

    for leave in app.leave_report_rows.iter().take(inner.height as usize) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16} ", leave.user.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:<14} ", leave.leave_type.label()),
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
            super::leave_status_span(leave.status),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_leave_pie(frame: &mut Frame, area: Rect, app: &App) {
    use tui_piechart::{PieChart, PieSlice};

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" By type ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total: usize = app.leave_type_counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        render_no_data(frame, inner);
        return;
    }

    let slices: Vec<PieSlice> = app
        .leave_type_counts
        .iter()
        .enumerate()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(i, (leave_type, count))| {
            let color = PALETTE[i % PALETTE.len()];
            let pct = *count as f64 / total as f64 * 100.0;
            PieSlice::new(leave_type.label(), pct, color)
        })
        .collect();

    // Pie: square-ish (width/2 for aspect ratio), capped at half the panel height
    let legend_rows = app.leave_type_counts.len() as u16 + 1;
    let pie_height = (inner.width / 2)
        .min(inner.height / 2)
        .min(inner.height.saturating_sub(legend_rows));

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(inner);

    // Render pie without its built-in legend
    let pie = PieChart::new(slices).show_legend(false).show_percentages(false);
    frame.render_widget(pie, split[0]);

    // Render legend manually, one entry per line, colored
    let mut legend_lines: Vec<Line> = Vec::new();
    for (i, (leave_type, count)) in app.leave_type_counts.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let pct = *count as f64 / total as f64 * 100.0;
        legend_lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                format!("{}: {} ({:.0}%)", leave_type.label(), count, pct),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    let legend = Paragraph::new(legend_lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(ratatui::widgets::Padding::new(0, 0, 1, 0)));
    frame.render_widget(legend, split[1]);
}

fn render_no_data(frame: &mut Frame, inner: Rect) {
    frame.render_widget(
        Paragraph::new("No data")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls_text = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Switch report  "),
        Span::styled("←→/[]", Style::default().fg(Color::Yellow)),
        Span::raw(": Change month  "),
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
