//! Utility functions

pub mod paths;

pub use paths::{basename, extension};

use std::cmp::Ordering;

/// Locale-aware path comparison used for the table of contents and body
/// ordering: case-insensitive primary key with the raw string as tiebreak,
/// so `C.py` sorts after `b.py` rather than before `a.py`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Format whole seconds as `HH:MM:SS`.
pub fn format_hms(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::{format_hms, locale_cmp};

    #[test]
    fn locale_cmp_is_case_insensitive_first() {
        let mut paths = vec!["b.py", "a.py", "C.py"];
        paths.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(paths, vec!["a.py", "b.py", "C.py"]);
    }

    #[test]
    fn locale_cmp_breaks_ties_on_raw_string() {
        let mut paths = vec!["README.md", "readme.md"];
        paths.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(paths, vec!["README.md", "readme.md"]);
    }

    #[test]
    fn format_hms_pads_all_fields() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(61), "00:01:01");
        assert_eq!(format_hms(3723), "01:02:03");
    }
}
