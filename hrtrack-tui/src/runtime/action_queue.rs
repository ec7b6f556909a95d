use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Work the key handlers hand off to the async side of the loop.
#[derive(Debug, Clone)]
pub(super) enum Action {
    LoadDashboard,
    RefreshBackground,

    // Clock actions (employee dashboard)
    ClockIn,
    ClockOut,
    StartBreak,
    EndBreak,

    // Leave
    SubmitLeave,
    ApproveLeave { id: String },
    RejectLeave { id: String },
    LoadLeaveReview,

    // Timesheet approval (manager dashboard)
    ApproveTimesheet { id: String },
    RejectTimesheet { id: String },

    // Staff directory
    LoadEmployees,
    SubmitEmployee,
    DeleteEmployee,

    // Payroll
    LoadPayrolls,
    GeneratePayroll,

    // Reports
    LoadReports,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    unbounded_channel()
}
