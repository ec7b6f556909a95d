use crate::app::{App, ManagerQueue, ReportTab, View};
use crate::time_utils::{format_clock_time, format_date, format_hours, presence_label, to_local_time};
use hrtrack::domain::{ApprovalStatus, AttendanceStatus, LeaveStatus, PayrollStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, Padding, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};

mod delete_dialog;
mod employee_view;
mod employees_view;
mod forms;
mod hr_view;
mod leave_review_view;
mod login_view;
mod manager_view;
mod payroll_view;
mod reports_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Login => login_view::render_login_view(frame, app, body),
        View::EmployeeHome => employee_view::render_employee_view(frame, app, body),
        View::ManagerHome => manager_view::render_manager_view(frame, app, body),
        View::HrHome => hr_view::render_hr_view(frame, app, body),
        View::Employees => employees_view::render_employees_view(frame, app, body),
        View::AddEmployee => forms::render_employee_form(frame, app, body),
        View::Payrolls => payroll_view::render_payroll_view(frame, app, body),
        View::LeaveForm => forms::render_leave_form(frame, app, body),
        View::LeaveReview => leave_review_view::render_leave_review_view(frame, app, body),
        View::Reports => reports_view::render_reports_view(frame, app, body),
        View::ConfirmDelete => {
            // The directory stays visible behind the confirmation popup.
            employees_view::render_employees_view(frame, app, body);
            delete_dialog::render_delete_confirm_dialog(frame, app);
        }
    }

    render_status_line(frame, root[2], app);
}

/// Top bar: throbber + app label on the left, current view and signed-in
/// user on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    // Split vertically: 1 blank row, 1 content row (no bottom padding)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    // Add 2-char horizontal padding on each side
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);

    let mut info_spans = vec![Span::styled(app.current_view.title(), white)];
    if let Some(session) = &app.session {
        info_spans.push(Span::styled(" | ", muted));
        info_spans.push(Span::styled(session.user.name.clone(), white));
        info_spans.push(Span::styled(
            format!(" ({})", session.user.role),
            muted,
        ));
    }
    let info_line = Line::from(info_spans);
    let info_width = info_line.width() as u16;

    // Column widths: throbber (1 char) + " HRTrack"
    const LABEL: &str = " HRTrack";
    let title_width = 1 + LABEL.len() as u16 + 1; // leading space + symbol + label

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_width), // App title
            Constraint::Min(1),              // spacer
            Constraint::Length(info_width),  // view + user info
        ])
        .split(area);

    // Render title: throbber (spinning when loading, full symbol when idle) + label
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );

    frame.render_widget(Paragraph::new(info_line), cols[2]);
}

/// Bottom row: the transient status message, colored by content.
fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = &app.status_message else {
        return;
    };

    let lower = message.to_lowercase();
    let is_error = lower.starts_with("error")
        || lower.contains("could not")
        || lower.contains("expired")
        || lower.contains("already")
        || lower.contains("nothing")
        || lower.contains("need");

    let color = if is_error { Color::Red } else { Color::Green };
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(message.clone(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// The view's stored fetch error, ready to prepend to a panel.
fn view_error_line(app: &App, view: View) -> Option<Line<'static>> {
    app.view_errors.get(&view).map(|err| {
        Line::from(Span::styled(
            format!("⚠ {}", err),
            Style::default().fg(Color::Red),
        ))
    })
}

fn leave_status_span(status: LeaveStatus) -> Span<'static> {
    match status {
        LeaveStatus::Pending => Span::styled("Pending", Style::default().fg(Color::Yellow)),
        LeaveStatus::Approved => Span::styled("Approved", Style::default().fg(Color::Green)),
        LeaveStatus::Rejected => Span::styled("Rejected", Style::default().fg(Color::Red)),
    }
}

fn approval_span(approval: ApprovalStatus) -> Span<'static> {
    match approval {
        ApprovalStatus::Pending => Span::styled("Pending", Style::default().fg(Color::Yellow)),
        ApprovalStatus::Approved => Span::styled("Approved", Style::default().fg(Color::Green)),
        ApprovalStatus::Rejected => Span::styled("Rejected", Style::default().fg(Color::Red)),
    }
}

fn payroll_status_span(status: PayrollStatus) -> Span<'static> {
    let color = match status {
        PayrollStatus::Pending => Color::Yellow,
        PayrollStatus::Processed => Color::Cyan,
        PayrollStatus::Paid => Color::Green,
    };
    Span::styled(status.label(), Style::default().fg(color))
}
