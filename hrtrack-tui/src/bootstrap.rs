use hrtrack::domain::Dashboard;

use crate::app::App;
use crate::backend::Backend;

/// Fills the dashboard with an initial snapshot before the first frame.
///
/// Failures are warnings, not fatal: the dashboard comes up empty and the
/// user can retry with a refresh. An expired token surfaces on the first
/// action instead.
pub async fn initialize_app_state(app: &mut App, backend: &Backend) {
    app.is_loading = true;

    match Dashboard::for_session(app.session.as_ref()) {
        Dashboard::Employee => {
            let records = backend.my_attendance().await;
            let leaves = backend.my_leaves().await;
            match (records, leaves) {
                (Ok(records), Ok(leaves)) => app.update_my_data(records, leaves),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("Warning: Could not load your dashboard: {}", e)
                }
            }
        }
        Dashboard::Manager => {
            match backend.all_attendance().await {
                Ok(records) => app.update_team_records(records),
                Err(e) => eprintln!("Warning: Could not load team attendance: {}", e),
            }

            match backend.review_leaves().await {
                Ok(leaves) => app.update_review_leaves(leaves),
                Err(e) => eprintln!("Warning: Could not load leave requests: {}", e),
            }
        }
        Dashboard::HrAdmin => {
            match backend.employees().await {
                Ok(employees) => app.update_employees(employees),
                Err(e) => eprintln!("Warning: Could not load employees: {}", e),
            }

            match backend.payrolls().await {
                Ok(entries) => app.update_payrolls(entries),
                Err(e) => eprintln!("Warning: Could not load payrolls: {}", e),
            }

            match backend.all_leaves().await {
                Ok(leaves) => app.update_all_leaves(leaves),
                Err(e) => eprintln!("Warning: Could not load leave requests: {}", e),
            }
        }
        Dashboard::Login => {}
    }

    app.is_loading = false;
}
