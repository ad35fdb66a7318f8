#[cfg(test)]
mod tests {
    use studymate::libs::paging::Page;

    #[test]
    fn test_pages_split_at_page_size() {
        let items: Vec<u32> = (1..=7).collect();

        let first = Page::compute(items.len(), 5, 1);
        assert_eq!(first.number, 1);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.slice(&items), &[1, 2, 3, 4, 5]);

        let second = Page::compute(items.len(), 5, 2);
        assert_eq!(second.number, 2);
        assert_eq!(second.slice(&items), &[6, 7]);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let items: Vec<u32> = (1..=10).collect();

        let page = Page::compute(items.len(), 5, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.slice(&items), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_request_past_the_end_clamps_to_last_page() {
        let items: Vec<u32> = (1..=7).collect();

        let page = Page::compute(items.len(), 5, 9);
        assert_eq!(page.number, 2);
        assert_eq!(page.slice(&items), &[6, 7]);
    }

    #[test]
    fn test_request_zero_clamps_to_first_page() {
        let items: Vec<u32> = (1..=7).collect();

        let page = Page::compute(items.len(), 5, 0);
        assert_eq!(page.number, 1);
        assert_eq!(page.slice(&items), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_list_still_has_one_page() {
        let items: Vec<u32> = Vec::new();

        let page = Page::compute(0, 5, 1);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.slice(&items).is_empty());
    }

    #[test]
    fn test_page_size_zero_is_treated_as_one() {
        let items: Vec<u32> = (1..=3).collect();

        let page = Page::compute(items.len(), 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.slice(&items), &[2]);
    }

    #[test]
    fn test_single_short_page() {
        let items = vec!["only"];

        let page = Page::compute(items.len(), 5, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.slice(&items), &["only"]);
    }
}
