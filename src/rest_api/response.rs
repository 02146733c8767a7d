//! # Response Formatting
//!
//! HTML pages served next to the JSON API.

use axum::response::Html;
use chrono::{DateTime, TimeZone};

/// Landing page
pub fn home_page() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// Summary of how many persons the phonebook holds, stamped with `at`
pub fn info_page<Tz>(count: usize, at: &DateTime<Tz>) -> Html<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    Html(format!(
        "<p>Phonebook has info for {} people</p><p>{}</p>",
        count,
        at.to_rfc2822()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_info_page() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let Html(body) = info_page(4, &at);
        assert_eq!(
            body,
            "<p>Phonebook has info for 4 people</p><p>Tue, 2 Jan 2024 03:04:05 +0000</p>"
        );
    }

    #[test]
    fn test_home_page() {
        assert_eq!(home_page().0, "<h1>Hello World!</h1>");
    }
}
