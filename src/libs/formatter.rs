//! Display formatting helpers for tables and summaries.
//!
//! Small pure functions shared by the view layer: thousands separators for XP
//! figures, text progress bars for skill levels and milestone progress, and
//! label capitalization for activity kinds. Keeping them here means table
//! rendering and export code format values identically.
//!
//! ## Examples
//!
//! ```rust
//! use studymate::libs::formatter::{capitalize, format_bar, format_number};
//!
//! assert_eq!(format_number(12500), "12,500");
//! assert_eq!(format_bar(65, 10), "██████░░░░");
//! assert_eq!(capitalize("quiz"), "Quiz");
//! ```

/// Formats an integer with `,` thousands separators.
///
/// ```rust
/// use studymate::libs::formatter::format_number;
///
/// assert_eq!(format_number(0), "0");
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(1250), "1,250");
/// assert_eq!(format_number(1000000), "1,000,000");
/// ```
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

/// Renders a percentage as a fixed-width text bar.
///
/// Percentages above 100 are clamped; the filled portion is floored so a bar
/// never overstates progress.
///
/// ```rust
/// use studymate::libs::formatter::format_bar;
///
/// assert_eq!(format_bar(0, 10), "░░░░░░░░░░");
/// assert_eq!(format_bar(100, 10), "██████████");
/// assert_eq!(format_bar(42, 10), "████░░░░░░");
/// ```
pub fn format_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

/// Uppercases the first character of a label.
///
/// Used for activity and post kinds, which are stored lowercase and displayed
/// capitalized.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
