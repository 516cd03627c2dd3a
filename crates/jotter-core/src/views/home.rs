//! Home page content for the signed-in user

use chrono::{DateTime, Local};

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSummary {
    pub email: String,
    /// Registration time in local time, or empty if the stored timestamp is
    /// out of range
    pub registered: String,
}

impl HomeSummary {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            registered: format_timestamp(user.created_at),
        }
    }
}

/// Render Unix milliseconds as a local date and time
#[must_use]
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Render Unix milliseconds as a local date
#[must_use]
pub fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::user;

    #[test]
    fn summary_shows_email_and_registration() {
        let summary = HomeSummary::for_user(&user(1));
        assert_eq!(summary.email, "user1@b.com");
        assert!(summary.registered.starts_with("2023-11-1"));
    }

    #[test]
    fn out_of_range_timestamp_renders_empty() {
        assert_eq!(format_timestamp(i64::MAX), "");
        assert_eq!(format_date(i64::MIN), "");
    }
}
