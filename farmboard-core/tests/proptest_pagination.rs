//! Property tests for page arithmetic

use farmboard_core::Pagination;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pages_cover_every_item(total in 0i64..1_000_000, per_page in 1i64..500) {
        let p = Pagination::new(1, per_page).unwrap();
        let pages = p.total_pages(total);

        prop_assert!(pages * per_page >= total);
        prop_assert!(pages == 0 || (pages - 1) * per_page < total);
    }

    #[test]
    fn offsets_are_contiguous(page in 1i64..10_000, per_page in 1i64..500) {
        let this = Pagination::new(page, per_page).unwrap();
        let next = Pagination::new(page + 1, per_page).unwrap();

        prop_assert_eq!(next.offset() - this.offset(), per_page);
        prop_assert!(this.offset() >= 0);
    }

    #[test]
    fn non_positive_per_page_is_rejected(page in any::<i64>(), per_page in i64::MIN..=0) {
        prop_assert!(Pagination::new(page, per_page).is_err());
    }
}
