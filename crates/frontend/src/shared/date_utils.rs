//! Utilities for date formatting
//!
//! The backend sends dates either as "YYYY-MM-DD" or as a full ISO datetime.

/// Date part of an ISO string, suitable for `<input type="date">`
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn date_only(value: &str) -> String {
    value.split('T').next().unwrap_or(value).trim().to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Validity window of a promotion, as shown in the admin table
pub fn format_period(start: &str, end: &str) -> String {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => "Permanente".to_string(),
        (false, true) => format!("Desde {}", format_date(start)),
        (true, false) => format!("Hasta {}", format_date(end)),
        (false, false) => format!("{} - {}", format_date(start), format_date(end)),
    }
}

/// Today's local date as "YYYY-MM-DD"
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Milliseconds since the epoch, from the browser clock
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
