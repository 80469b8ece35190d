use chrono::{DateTime, Local};

/// Join the API base (possibly empty for same-origin) with an endpoint path
pub fn build_api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Short hour:minute label shown under each message
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_api_url() {
        assert_eq!(build_api_url("", "/api/chat"), "/api/chat");
        assert_eq!(
            build_api_url("https://nomad.example/", "/api/health"),
            "https://nomad.example/api/health"
        );
    }

    #[test]
    fn test_format_time() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();
        assert_eq!(format_time(&ts), "07:05");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
