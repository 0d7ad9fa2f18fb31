//! Platform-agnostic data model and fetch trait.
//!
//! Everything downstream of fetching (activity resolution, classification,
//! reporting) depends only on the types in this module, never on a
//! platform's response shape.
//!
//! # Example
//!
//! ```ignore
//! use gitlist::platform::{PageFetcher, RepoPage};
//!
//! async fn first_page<F: PageFetcher>(fetcher: &F, org: &str) -> gitlist::platform::Result<RepoPage> {
//!     fetcher.fetch_page(org, None).await
//! }
//! ```

mod errors;
mod types;

pub use errors::{PlatformError, Result, short_error_message};
pub use types::{PageFetcher, RepoPage, RepositoryRecord};

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_record() -> RepositoryRecord {
        RepositoryRecord {
            url: "https://github.com/acme/widgets".to_string(),
            is_archived: false,
            is_empty: false,
            is_fork: true,
            is_disabled: false,
            primary_language: "Rust".to_string(),
            languages: vec!["Rust".to_string(), "Shell".to_string()],
            pushed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            pull_request_count: 7,
            branch_tips: vec![Utc.with_ymd_and_hms(2024, 4, 30, 8, 15, 0).unwrap()],
        }
    }

    #[test]
    fn test_platform_error_api() {
        let err = PlatformError::api("Something went wrong");
        assert!(err.to_string().contains("API error"));
        assert!(err.to_string().contains("Something went wrong"));
    }

    #[test]
    fn test_platform_error_not_found() {
        let err = PlatformError::not_found("organization acme");
        assert!(err.to_string().contains("Not found"));
        assert!(err.to_string().contains("acme"));
    }

    #[test]
    fn test_platform_error_network() {
        let err = PlatformError::network("connection refused");
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_platform_error_decode() {
        let err = PlatformError::decode("missing field `url`");
        assert!(err.to_string().contains("Malformed response"));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_platform_error_auth_required() {
        let err = PlatformError::AuthRequired;
        assert!(err.to_string().contains("Authentication required"));
    }

    #[test]
    fn test_short_error_message_takes_first_line() {
        let err = PlatformError::api("first line\nsecond line");
        assert_eq!(short_error_message(&err), "API error: first line");
    }

    #[test]
    fn test_repository_record_serializes_camel_case() {
        let value = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(value["url"], "https://github.com/acme/widgets");
        assert_eq!(value["isFork"], true);
        assert_eq!(value["isArchived"], false);
        assert_eq!(value["primaryLanguage"], "Rust");
        assert_eq!(value["pullRequestCount"], 7);
        assert_eq!(value["pushedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["languages"], serde_json::json!(["Rust", "Shell"]));
        assert_eq!(value["branchTips"][0], "2024-04-30T08:15:00Z");
    }

    #[test]
    fn test_repository_record_json_round_trip_preserves_order() {
        let mut record = sample_record();
        record.languages = vec!["Go".into(), "Rust".into(), "C".into()];
        record.branch_tips = vec![
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
        ];

        let json = serde_json::to_string(&record).unwrap();
        let decoded: RepositoryRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_repo_page_default_is_final_and_empty() {
        let page = RepoPage::default();
        assert!(page.records.is_empty());
        assert!(page.next_cursor.is_none());
        assert!(!page.has_more);
    }
}
