//! Shared formatting utilities for the dashboard views.

use chrono::{DateTime, TimeZone, Utc};

/// Format an amount in paise as Indian rupees: `₹1,85,000`, `₹12.50`.
///
/// Uses lakh/crore digit grouping. Paise are shown only when non-zero.
pub fn format_inr(amount_paise: u64) -> String {
    let rupees = amount_paise / 100;
    let paise = amount_paise % 100;

    let digits = rupees.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if paise == 0 {
        format!("₹{}", grouped)
    } else {
        format!("₹{}.{:02}", grouped, paise)
    }
}

/// Truncate to `max_chars` characters, appending `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// Up to two uppercase initials: "Priya Patel" → "PP".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// "Feb 24, 2026".
pub fn format_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %d, %Y").to_string()
}

/// "2:30 PM".
pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-I:%M %p").to_string()
}

/// Relative phrase such as "about 2 hours ago" or "in 3 days".
pub fn format_time_ago(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*at);
    let future = delta.num_seconds() < 0;
    let minutes = delta.num_minutes().unsigned_abs();

    let phrase = match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 45 => format!("{} minutes", m),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < 24 * 60 => format!("about {} hours", (m + 30) / 60),
        m if m < 42 * 60 => "1 day".to_string(),
        m if m < 30 * 24 * 60 => format!("{} days", (m + 12 * 60) / (24 * 60)),
        m if m < 45 * 24 * 60 => "about 1 month".to_string(),
        m if m < 365 * 24 * 60 => format!("{} months", (m + 15 * 24 * 60) / (30 * 24 * 60)),
        m => {
            let years = m / (365 * 24 * 60);
            if years == 1 {
                "about 1 year".to_string()
            } else {
                format!("about {} years", years)
            }
        }
    };

    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}
