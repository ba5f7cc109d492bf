//! Query parameters and page data shared by every list page.

use serde::{Deserialize, Deserializer, Serialize};

use crate::listing::StatusFilter;
use crate::pagination::Paginated;

/// Query string accepted by list pages: `?search=&status=&page=&clear=`.
///
/// Every parameter is read leniently; a malformed value never rejects the
/// request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    /// Free-text search applied to record names.
    pub search: Option<String>,
    /// `all`, `active` or `inactive`; anything else reads as `all`.
    pub status: Option<String>,
    /// Requested 1-indexed page. Non-numeric input reads as the first page;
    /// numbers too large for `usize` saturate to an empty page.
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
    /// Drops every filter and returns to the first page.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub clear: bool,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_page))
}

fn parse_page(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().unwrap_or(usize::MAX))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        )
    }))
}

#[derive(Serialize)]
struct ListLocation<'a> {
    search: &'a str,
    status: StatusFilter,
    page: usize,
}

impl ListQuery {
    /// Query string, without the leading `?`, that reopens the same filtered page.
    pub fn to_query_string(&self) -> String {
        let location = ListLocation {
            search: self.search.as_deref().unwrap_or_default().trim(),
            status: StatusFilter::from_query(self.status.as_deref()),
            page: self.page.unwrap_or(1).max(1),
        };
        serde_html_form::to_string(&location).unwrap_or_default()
    }
}

/// Data required to render a filterable table.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    pub records: Paginated<T>,
    /// Search term echoed back into the search box.
    pub search: String,
    pub status: StatusFilter,
}

impl<T> ListPageData<T> {
    /// Converts each record on the page into a template-facing row.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListPageData<U> {
        ListPageData {
            records: self.records.map(f),
            search: self.search,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::web;

    use super::*;

    fn parse(query: &str) -> ListQuery {
        web::Query::<ListQuery>::from_query(query)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn malformed_page_reads_as_first() {
        assert_eq!(parse("page=").page, None);
        assert_eq!(parse("page=-1").page, None);
        assert_eq!(parse("page=two").page, None);
        assert_eq!(parse("page=3").page, Some(3));
    }

    #[test]
    fn oversized_page_saturates() {
        assert_eq!(parse("page=99999999999999999999999").page, Some(usize::MAX));
    }

    #[test]
    fn clear_accepts_common_truthy_values() {
        assert!(parse("clear=true").clear);
        assert!(parse("clear=1").clear);
        assert!(parse("clear=on").clear);
        assert!(!parse("clear=false").clear);
        assert!(!parse("clear=nope").clear);
        assert!(!parse("").clear);
    }

    #[test]
    fn query_string_reopens_the_same_view() {
        let query = parse("search=+Business+&status=ACTIVE&page=2&clear=false");

        assert_eq!(
            query.to_query_string(),
            "search=Business&status=active&page=2"
        );
    }

    #[test]
    fn query_string_defaults_to_first_unfiltered_page() {
        assert_eq!(
            ListQuery::default().to_query_string(),
            "search=&status=all&page=1"
        );
    }
}
