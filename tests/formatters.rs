#[cfg(test)]
mod tests {
    use studymate::libs::formatter::{capitalize, format_bar, format_number};

    #[test]
    fn test_format_number_small_values_unchanged() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1250), "1,250");
        assert_eq!(format_number(12500), "12,500");
        assert_eq!(format_number(1000000), "1,000,000");
    }

    #[test]
    fn test_format_bar_zero_is_all_empty() {
        assert_eq!(format_bar(0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn test_format_bar_full_is_all_filled() {
        assert_eq!(format_bar(100, 10), "██████████");
    }

    #[test]
    fn test_format_bar_partial_fill_is_floored() {
        // 65% of 10 cells fills 6
        assert_eq!(format_bar(65, 10), "██████░░░░");
        // 42% of 10 cells fills 4
        assert_eq!(format_bar(42, 10), "████░░░░░░");
        // 9% of 10 cells rounds down to none
        assert_eq!(format_bar(9, 10), "░░░░░░░░░░");
    }

    #[test]
    fn test_format_bar_respects_width() {
        assert_eq!(format_bar(50, 4), "██░░");
        assert_eq!(format_bar(50, 0), "");
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("quiz"), "Quiz");
        assert_eq!(capitalize("study"), "Study");
        assert_eq!(capitalize("Note"), "Note");
    }

    #[test]
    fn test_capitalize_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("101 basics"), "101 basics");
    }
}
