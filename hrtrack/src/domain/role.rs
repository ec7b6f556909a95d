use serde::{Deserialize, Serialize};

use crate::Session;

/// Account role as the backend reports it. Wire values outside the four
/// known roles collapse into `Unknown`, which is never authorized for
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Admin,
    Unknown,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "employee" => Role::Employee,
            "manager" => Role::Manager,
            "hr" => Role::Hr,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Hr => "hr",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dashboard a session lands on. `hr` and `admin` share one dashboard;
/// everything unrecognized falls back to `Login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Employee,
    Manager,
    HrAdmin,
    Login,
}

impl Dashboard {
    pub fn for_session(session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Dashboard::Login;
        };
        if session.token.is_empty() {
            return Dashboard::Login;
        }

        match session.user.role {
            Role::Employee => Dashboard::Employee,
            Role::Manager => Dashboard::Manager,
            Role::Hr | Role::Admin => Dashboard::HrAdmin,
            Role::Unknown => Dashboard::Login,
        }
    }
}

pub const EMPLOYEE_LIST_ROLES: &[Role] = &[Role::Hr, Role::Admin];
pub const ADD_EMPLOYEE_ROLES: &[Role] = &[Role::Hr, Role::Admin];
pub const PAYROLL_HISTORY_ROLES: &[Role] = &[Role::Hr, Role::Manager, Role::Admin];
pub const REQUEST_LEAVE_ROLES: &[Role] = &[Role::Employee];
pub const LEAVE_REVIEW_ROLES: &[Role] = &[Role::Hr, Role::Manager, Role::Admin];
pub const REPORTS_ROLES: &[Role] = &[Role::Hr, Role::Manager, Role::Admin];

/// Whether a session may open a view restricted to `allowed` roles.
pub fn route_allows(allowed: &[Role], session: Option<&Session>) -> bool {
    session.is_some_and(|s| !s.token.is_empty() && allowed.contains(&s.user.role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionUser;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                role,
            },
        }
    }

    #[test]
    fn test_role_parses_known_values() {
        assert_eq!(Role::from("employee".to_string()), Role::Employee);
        assert_eq!(Role::from("hr".to_string()), Role::Hr);
        assert_eq!(Role::from("intern".to_string()), Role::Unknown);
    }

    #[test]
    fn test_hr_and_admin_share_dashboard() {
        let hr = session(Role::Hr);
        let admin = session(Role::Admin);
        assert_eq!(Dashboard::for_session(Some(&hr)), Dashboard::HrAdmin);
        assert_eq!(Dashboard::for_session(Some(&admin)), Dashboard::HrAdmin);
    }

    #[test]
    fn test_missing_session_goes_to_login() {
        assert_eq!(Dashboard::for_session(None), Dashboard::Login);
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let guest = session(Role::Unknown);
        assert_eq!(Dashboard::for_session(Some(&guest)), Dashboard::Login);
        assert!(!route_allows(EMPLOYEE_LIST_ROLES, Some(&guest)));
    }

    #[test]
    fn test_empty_token_goes_to_login() {
        let mut s = session(Role::Employee);
        s.token.clear();
        assert_eq!(Dashboard::for_session(Some(&s)), Dashboard::Login);
        assert!(!route_allows(REQUEST_LEAVE_ROLES, Some(&s)));
    }

    #[test]
    fn test_route_table() {
        let employee = session(Role::Employee);
        let manager = session(Role::Manager);
        let hr = session(Role::Hr);

        assert!(route_allows(REQUEST_LEAVE_ROLES, Some(&employee)));
        assert!(!route_allows(REQUEST_LEAVE_ROLES, Some(&manager)));

        assert!(route_allows(PAYROLL_HISTORY_ROLES, Some(&manager)));
        assert!(route_allows(PAYROLL_HISTORY_ROLES, Some(&hr)));
        assert!(!route_allows(PAYROLL_HISTORY_ROLES, Some(&employee)));

        assert!(route_allows(EMPLOYEE_LIST_ROLES, Some(&hr)));
        assert!(!route_allows(EMPLOYEE_LIST_ROLES, Some(&manager)));
    }
}
