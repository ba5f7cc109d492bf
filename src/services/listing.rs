//! Builds list-page data from a freshly loaded source collection.

use crate::dto::listing::{ListPageData, ListQuery};
use crate::listing::{FilterableList, Listable, StatusFilter};

/// Applies the query to `records` and detaches the requested page.
///
/// `clear` wins over every other parameter.
pub fn build_list_page<T>(records: Vec<T>, query: ListQuery, page_size: usize) -> ListPageData<T>
where
    T: Listable + Clone,
{
    let mut list = FilterableList::new(records, page_size);

    if query.clear {
        list.clear_filters();
    } else {
        let search = query
            .search
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        list.set_search_term(search);
        list.set_status_filter(StatusFilter::from_query(query.status.as_deref()));
        list.set_page(query.page.unwrap_or(1));
    }

    let view = list.view();
    ListPageData {
        records: view.to_paginated(),
        search: view.criteria.search_term.clone(),
        status: view.criteria.status,
    }
}
