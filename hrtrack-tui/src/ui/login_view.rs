use super::utils::centered_rect;
use super::*;

pub fn render_login_view(frame: &mut Frame, _app: &App, body: Rect) {
    let area = centered_rect(58, 11, body);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Not signed in",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Run `hrtrack-tui login` in a shell to create a session,",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "then start the dashboard again.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "`hrtrack-tui dev` explores the app on demo data.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" HRTrack ")
                .padding(Padding::horizontal(2)),
        );

    frame.render_widget(paragraph, area);
}
