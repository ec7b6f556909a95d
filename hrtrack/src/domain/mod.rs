mod attendance;
mod employee;
mod leave;
mod payroll;
mod reports;
mod role;

pub use attendance::*;
pub use employee::*;
pub use leave::*;
pub use payroll::*;
pub use reports::*;
pub use role::*;
