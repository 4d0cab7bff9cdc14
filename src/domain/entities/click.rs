//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a short link is accessed.
///
/// Captures metadata about each redirect for analytics purposes, including
/// client information (user agent, referrer) and network details (IP address).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip_address: Option<String>,
}

/// Input data for recording a new click event.
///
/// The `url_id` must reference an existing URL record; the timestamp is set
/// by the repository when the row is written.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_id: i64,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_all_fields() {
        let new_click = NewClick {
            url_id: 99,
            user_agent: Some("Chrome/120".to_string()),
            referer: Some("https://google.com".to_string()),
            ip_address: Some("10.0.0.1".to_string()),
        };

        assert_eq!(new_click.url_id, 99);
        assert!(new_click.user_agent.is_some());
        assert!(new_click.referer.is_some());
        assert!(new_click.ip_address.is_some());
    }

    #[test]
    fn test_new_click_minimal() {
        let new_click = NewClick {
            url_id: 10,
            user_agent: None,
            referer: None,
            ip_address: None,
        };

        assert_eq!(new_click.url_id, 10);
        assert!(new_click.user_agent.is_none());
    }
}
