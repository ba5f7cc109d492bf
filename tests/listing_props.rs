use proptest::prelude::*;
use storefront_admin::listing::{FilterableList, Listable, StatusFilter};

#[derive(Clone, Debug, PartialEq)]
struct Row {
    name: String,
    active: bool,
}

impl Listable for Row {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        ("[a-zA-Z ]{1,12}", any::<bool>()).prop_map(|(name, active)| Row { name, active }),
        0..40,
    )
}

fn status() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Active),
        Just(StatusFilter::Inactive),
    ]
}

fn is_ordered_subset(filtered: &[&Row], source: &[Row]) -> bool {
    let mut source = source.iter();
    filtered
        .iter()
        .all(|wanted| source.any(|candidate| candidate == *wanted))
}

proptest! {
    #[test]
    fn filtered_is_an_ordered_subset(source in rows(), term in "[a-z]{0,3}", status in status()) {
        let mut list = FilterableList::new(source.clone(), 5);
        list.set_search_term(term);
        list.set_status_filter(status);

        prop_assert!(is_ordered_subset(&list.filtered(), &source));
    }

    #[test]
    fn criteria_order_does_not_matter(source in rows(), term in "[a-z]{0,3}", status in status()) {
        let mut search_first = FilterableList::new(source.clone(), 5);
        search_first.set_search_term(term.clone());
        search_first.set_status_filter(status);

        let mut status_first = FilterableList::new(source, 5);
        status_first.set_status_filter(status);
        status_first.set_search_term(term);

        prop_assert_eq!(search_first.filtered(), status_first.filtered());
    }

    #[test]
    fn clear_restores_source(source in rows(), term in "[a-z]{0,3}", status in status(), page in 1usize..5) {
        let mut list = FilterableList::new(source.clone(), 3);
        list.set_search_term(term);
        list.set_status_filter(status);
        list.set_page(page);

        let view = list.clear_filters();

        prop_assert_eq!(view.page, 1);
        prop_assert_eq!(view.total, source.len());
        let filtered: Vec<Row> = list.filtered().into_iter().cloned().collect();
        prop_assert_eq!(filtered, source);
    }

    #[test]
    fn pages_partition_the_filtered_collection(source in rows(), size in 1usize..7) {
        let list = FilterableList::new(source.clone(), size);

        let mut joined = Vec::new();
        for page in 1..=list.total_pages() {
            let items = list.get_page(page);
            prop_assert!(items.len() <= size);
            joined.extend(items.into_iter().cloned());
        }

        prop_assert_eq!(joined, source);
    }

    #[test]
    fn out_of_range_pages_are_empty(source in rows(), extra in 1usize..1000) {
        let list = FilterableList::new(source, 4);

        prop_assert!(list.get_page(0).is_empty());
        prop_assert!(list.get_page(list.total_pages() + extra).is_empty());
        prop_assert!(list.get_page(usize::MAX).is_empty());
    }
}
