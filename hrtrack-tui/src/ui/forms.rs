use super::*;
use crate::app::{EmployeeFormField, LeaveFormField, TextInput};

pub fn render_leave_form(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Form fields
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let form = &app.leave_form;
    let focused = form.focused_field;

    let type_value = if focused == LeaveFormField::Type {
        format!("‹ {} ›", form.leave_type.label())
    } else {
        form.leave_type.label().to_string()
    };

    let mut lines = vec![
        Line::from(""),
        field_line("Type", type_value, focused == LeaveFormField::Type),
        input_line(
            "Start date",
            &form.start_input,
            focused == LeaveFormField::StartDate,
        ),
        input_line("End date", &form.end_input, focused == LeaveFormField::EndDate),
        input_line("Reason", &form.reason_input, focused == LeaveFormField::Reason),
        Line::from(""),
        Line::from(Span::styled(
            "Dates are YYYY-MM-DD; the end date may equal the start date.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Request leave ")
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, chunks[0]);

    render_form_controls(frame, chunks[1], "Change type", "Submit");
}

pub fn render_employee_form(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Form fields
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let form = &app.employee_form;
    let focused = form.focused_field;

    let role_value = if focused == EmployeeFormField::Role {
        format!("‹ {} ›", form.role)
    } else {
        form.role.to_string()
    };

    let password_focused = focused == EmployeeFormField::Password;
    let password_value = if password_focused {
        let masked_before = "•".repeat(
            form.password_input.value[..form.password_input.cursor]
                .chars()
                .count(),
        );
        let masked_after = "•".repeat(
            form.password_input.value[form.password_input.cursor..]
                .chars()
                .count(),
        );
        format!("{}█{}", masked_before, masked_after)
    } else {
        "•".repeat(form.password_input.value.chars().count())
    };

    let mut lines = vec![
        Line::from(""),
        input_line("Name", &form.name_input, focused == EmployeeFormField::Name),
        input_line("Email", &form.email_input, focused == EmployeeFormField::Email),
        field_line("Password", password_value, password_focused),
        field_line("Role", role_value, focused == EmployeeFormField::Role),
        input_line(
            "Department",
            &form.department_input,
            focused == EmployeeFormField::Department,
        ),
        input_line(
            "Position",
            &form.position_input,
            focused == EmployeeFormField::Position,
        ),
        input_line(
            "Salary",
            &form.salary_input,
            focused == EmployeeFormField::Salary,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Department, position and salary are optional.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add employee ")
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, chunks[0]);

    render_form_controls(frame, chunks[1], "Change role", "Save");
}

fn input_line(label: &str, input: &TextInput, is_focused: bool) -> Line<'static> {
    let value = if is_focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    };
    field_line(label, value, is_focused)
}

fn field_line(label: &str, value: String, is_focused: bool) -> Line<'static> {
    let label_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if is_focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{:<12}", label), label_style),
        Span::styled(value, value_style),
    ])
}

fn render_form_controls(frame: &mut Frame, area: Rect, cycle_hint: &str, submit_hint: &str) {
    let controls_text = vec![
        Span::styled("Tab/↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::raw(format!(": {}  ", cycle_hint)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(format!(": {}  ", submit_hint)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
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
