//! Small shared formatting helpers.

/// Format a number with thousands separators (`125430` → `"125,430"`).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Truncate a string to `max_len` characters, appending "…" if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Format an uptime as `4h 12m` / `12m 05s` / `42s`.
pub fn format_uptime(secs: u64) -> String {
    let (hours, mins, rest) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else if mins > 0 {
        format!("{mins}m {rest:02}s")
    } else {
        format!("{rest}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(125_430), "125,430");
        assert_eq!(format_number(1_200_000), "1,200,000");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 8), "a longe…");
    }

    #[test]
    fn uptime_buckets() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(725), "12m 05s");
        assert_eq!(format_uptime(15_120), "4h 12m");
    }
}
