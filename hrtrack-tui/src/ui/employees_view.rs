use super::*;

pub fn render_employees_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Employee list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    // Search input box
    let search_text = if app.employee_search_input.value.is_empty() {
        if app.employee_list_focused {
            "Type to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.employee_list_focused {
        app.employee_search_input.value.clone()
    } else {
        let (before, after) = app.employee_search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if app.employee_list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    // Employee list, filtered by name or email
    let items: Vec<ListItem> = app
        .filtered_employees
        .iter()
        .enumerate()
        .map(|(i, employee)| {
            let department = employee.department.as_deref().unwrap_or("-");
            let position = employee.position.as_deref().unwrap_or("-");
            let text = format!(
                "{:<20} {:<28} {:<9} {:<16} {}",
                employee.name, employee.email, employee.role, department, position
            );

            let style = if i == app.employee_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(text).style(style)
        })
        .collect();

    // Show count: filtered / total
    let title = if app.employee_search_input.value.is_empty() {
        format!(" Employees ({}) ", app.employees.len())
    } else {
        format!(
            " Employees ({}/{}) ",
            app.filtered_employees.len(),
            app.employees.len()
        )
    };

    let list_border = if app.employee_list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(list_border)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    if let Some(error) = super::view_error_line(app, View::Employees) {
        let row = Rect {
            x: chunks[1].x + 2,
            y: chunks[1].y + 1,
            width: chunks[1].width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(Paragraph::new(error), row);
    }

    // Controls
    let controls_text = if app.employee_list_focused {
        vec![
            Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
            Span::raw(": Navigate  "),
            Span::styled("A", Style::default().fg(Color::Yellow)),
            Span::raw(": Add  "),
            Span::styled("D", Style::default().fg(Color::Yellow)),
            Span::raw(": Remove  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Search  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Back  "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ]
    } else {
        vec![
            Span::styled("Type", Style::default().fg(Color::Yellow)),
            Span::raw(": Filter  "),
            Span::styled("Tab/Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Focus list  "),
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(": Navigate  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Back"),
        ]
    };

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

    frame.render_widget(controls, chunks[2]);
}
