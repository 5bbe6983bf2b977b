//! A1-notation helpers.

/// The area wiped before a tab is rewritten.
pub const CLEAR_BOUNDS: &str = "A1:Z1000";

/// Quotes a tab title for use in A1 notation when it contains anything other than letters, digits, `_` or `-`.
pub fn quoted_title(title: &str) -> String {
    if !title.is_empty() && title.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        title.to_string()
    } else {
        format!("'{}'", title.replace('\'', "''"))
    }
}

pub fn a1_range(title: &str, cells: &str) -> String {
    format!("{}!{cells}", quoted_title(title))
}

/// `<tab>!A1:Z1000`
pub fn clear_range(title: &str) -> String {
    a1_range(title, CLEAR_BOUNDS)
}

/// `<tab>!A1`, the anchor for a wholesale table write.
pub fn anchor(title: &str) -> String {
    a1_range(title, "A1")
}
