//! Free-text token extraction for card descriptions.
//!
//! Descriptions may carry informal `#word` labels and at most one bracketed
//! `[YYYY-MM-DD]` date token that becomes the card's upcoming date. Both
//! extractions are pure functions over the text so the form, the CLI and the
//! renderer share one contract.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// A bracket group whose body ends in a date-shaped token.
static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*?\d{4}-\d{2}-\d{2})\]").unwrap());

/// Hashtag-style labels.
static TAG_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

/// Extract the upcoming date from a description.
///
/// The last `[YYYY-MM-DD]` group that is not trailed by a stray closing
/// bracket wins; its body must parse as a real calendar date in full, so
/// `[notes 2024-03-15]` and `[2024-13-45]` both leave the date unset.
/// Malformed tokens are ignored, never errors.
pub fn upcoming_date(description: &str) -> Option<NaiveDate> {
    let mut candidate: Option<&str> = None;
    for caps in DATE_TOKEN.captures_iter(description) {
        let whole = caps.get(0).unwrap();
        if followed_by_stray_close(&description[whole.end()..]) {
            continue;
        }
        candidate = Some(caps.get(1).unwrap().as_str());
    }
    candidate.and_then(|body| NaiveDate::parse_from_str(body, "%Y-%m-%d").ok())
}

/// True when the text opens with a `]` that no `[` precedes, which marks the
/// just-matched group as nested inside a larger bracketed region.
fn followed_by_stray_close(rest: &str) -> bool {
    for ch in rest.chars() {
        match ch {
            '[' => return false,
            ']' => return true,
            _ => {}
        }
    }
    false
}

/// Extract the `#word` labels of a description, in order of appearance.
pub fn tags(description: &str) -> Vec<String> {
    TAG_TOKEN
        .find_iter(description)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_and_tag_from_mixed_description() {
        let desc = "fix bug #urgent [2024-03-15] more text";
        assert_eq!(
            upcoming_date(desc),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(tags(desc), vec!["#urgent".to_string()]);
    }

    #[test]
    fn last_date_token_wins() {
        let desc = "[2024-01-02] then moved to [2024-05-06]";
        assert_eq!(upcoming_date(desc), NaiveDate::from_ymd_opt(2024, 5, 6));
    }

    #[test]
    fn token_inside_larger_bracket_region_is_skipped() {
        // The date group is trailed by a stray `]`, so it does not count.
        assert_eq!(upcoming_date("notes [was [2024-01-02]] once"), None);
        // An earlier clean token still wins over a trailing nested one.
        assert_eq!(
            upcoming_date("[2024-01-02] junk [x [2024-05-06]] y"),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn invalid_calendar_date_is_ignored() {
        assert_eq!(upcoming_date("due [2024-13-45]"), None);
        assert_eq!(upcoming_date("due [soon 2024-03-15]"), None);
        assert_eq!(upcoming_date("no token at all"), None);
    }

    #[test]
    fn multiple_tags_in_order() {
        assert_eq!(
            tags("#backend work on #db_layer and #api"),
            vec!["#backend", "#db_layer", "#api"]
        );
        assert!(tags("no labels here").is_empty());
    }
}
