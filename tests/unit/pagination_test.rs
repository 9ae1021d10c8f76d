// Property-based tests for page arithmetic
//
// Walking every page of a list must visit each element exactly once, in
// order, and the reported totals must agree with what was visited.

use chefstore::core::pagination::{total_pages, MAX_PAGE_SIZE};
use chefstore::core::{Page, PageOptions, SortDirection, SortField};
use proptest::prelude::*;

fn options(page: u32, size: u32) -> PageOptions {
    PageOptions::new(page, size, SortField::Id, SortDirection::Asc).unwrap()
}

proptest! {
    #[test]
    fn test_pages_partition_the_list(len in 0usize..300, size in 1u32..=MAX_PAGE_SIZE) {
        let all: Vec<usize> = (0..len).collect();
        let first = Page::from_slice(all.clone(), &options(1, size));

        let mut seen = Vec::with_capacity(len);
        for page_number in 1..=first.total_pages.max(1) {
            let page = Page::from_slice(all.clone(), &options(page_number as u32, size));
            prop_assert!(page.items.len() <= size as usize);
            seen.extend(page.items);
        }

        prop_assert_eq!(seen, all);
    }

    #[test]
    fn test_total_pages_covers_every_element(total in 0u64..100_000, size in 1u32..=MAX_PAGE_SIZE) {
        let pages = total_pages(total, size);

        prop_assert!(pages * u64::from(size) >= total);
        if total > 0 {
            prop_assert!((pages - 1) * u64::from(size) < total);
        } else {
            prop_assert_eq!(pages, 0);
        }
    }

    #[test]
    fn test_offset_matches_page_number(page in 1u32..10_000, size in 1u32..=MAX_PAGE_SIZE) {
        let opts = options(page, size);
        prop_assert_eq!(opts.offset(), u64::from(page - 1) * u64::from(size));
        prop_assert_eq!(opts.limit(), u64::from(size));
    }

    #[test]
    fn test_page_past_end_is_empty(len in 0usize..50, extra in 1u32..20) {
        let all: Vec<usize> = (0..len).collect();
        let size = 10;
        let past_end = total_pages(len as u64, size) as u32 + extra;

        let page = Page::from_slice(all, &options(past_end, size));
        prop_assert!(page.items.is_empty());
        prop_assert_eq!(page.total_elements, len as u64);
    }
}

#[test]
fn test_page_serializes_totals() {
    let page = Page::new(&options(2, 10), 21, vec!["a", "b"]);
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["page_number"], 2);
    assert_eq!(json["page_size"], 10);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["total_elements"], 21);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_map_keeps_totals() {
    let page = Page::new(&options(1, 5), 7, vec![1, 2, 3, 4, 5]).map(|n| n * 10);
    assert_eq!(page.items, vec![10, 20, 30, 40, 50]);
    assert_eq!(page.total_pages, 2);
    assert!(!page.is_last());
}
