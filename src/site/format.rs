// site/format.rs - Display formatting for video metadata
//
// Pure string helpers shared by the cards, the modal and the tests.

use chrono::DateTime;

/// Format an ISO-8601 duration of the form `PT[nH][nM][nS]`
///
/// Returns `H:MM:SS` when there are hours, `M:SS` otherwise. Empty or
/// malformed input renders as `0:00`.
pub fn format_duration(duration: &str) -> String {
    let Some((hours, minutes, seconds)) = parse_duration(duration) else {
        return "0:00".to_string();
    };

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Split `PT1H2M3S` into (1, 2, 3); components must appear in H, M, S order
fn parse_duration(duration: &str) -> Option<(u64, u64, u64)> {
    let mut rest = duration.strip_prefix("PT")?;
    let mut parts = [0_u64; 3];
    let mut next_unit = 0;

    while !rest.is_empty() {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let value: u64 = rest[..digits].parse().ok()?;
        let unit = match rest[digits..].chars().next()? {
            'H' => 0,
            'M' => 1,
            'S' => 2,
            _ => return None,
        };
        if unit < next_unit {
            return None;
        }
        parts[unit] = value;
        next_unit = unit + 1;
        rest = &rest[digits + 1..];
    }

    Some((parts[0], parts[1], parts[2]))
}

/// `Jan 15, 2025`; unparseable timestamps are returned as-is
pub fn short_date(published_at: &str) -> String {
    format_timestamp(published_at, "%b %-d, %Y")
}

/// `January 15, 2025`; unparseable timestamps are returned as-is
pub fn long_date(published_at: &str) -> String {
    format_timestamp(published_at, "%B %-d, %Y")
}

fn format_timestamp(published_at: &str, pattern: &str) -> String {
    DateTime::parse_from_rfc3339(published_at)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|_| published_at.to_string())
}

/// `1,234,567 views`
pub fn format_view_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if count == 1 {
        "1 view".to_string()
    } else {
        format!("{} views", grouped)
    }
}

/// Escape text so it can be placed inside HTML markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escaped plain text with newlines turned into `<br>`
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}
