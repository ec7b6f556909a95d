#[derive(Debug, Clone)]
pub struct HrUrl(String);

impl AsRef<str> for HrUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl HrUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Add a `month=YYYY-MM` query parameter.
    pub fn with_month_filter(&self, month_key: &str) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&month={}", self.0, month_key))
        } else {
            Self(format!("{}?month={}", self.0, month_key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_path_normalizes_slashes() {
        let url = HrUrl::new("http://localhost:5000/api/");
        assert_eq!(
            url.append_path("/attendance/my").as_ref(),
            "http://localhost:5000/api/attendance/my"
        );
        assert_eq!(
            url.append_path("leave/all").as_ref(),
            "http://localhost:5000/api/leave/all"
        );
    }

    #[test]
    fn test_month_filter() {
        let url = HrUrl::new("http://localhost:5000/api").append_path("reports/attendance");
        assert_eq!(
            url.with_month_filter("2024-02").as_ref(),
            "http://localhost:5000/api/reports/attendance?month=2024-02"
        );
    }
}
