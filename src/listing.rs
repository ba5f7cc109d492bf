//! Search, status filter and pagination over an in-memory record collection.
//!
//! A [`FilterableList`] owns an immutable source collection and the
//! [`FilterCriteria`] currently applied to it. Every mutation re-filters the
//! whole source and hands back the derived [`ListView`], so the caller decides
//! what to render from the returned value rather than re-reading state.
//!
//! ```
//! use storefront_admin::listing::{FilterableList, Listable, StatusFilter};
//!
//! struct Row(&'static str, bool);
//!
//! impl Listable for Row {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!     fn is_active(&self) -> bool {
//!         self.1
//!     }
//! }
//!
//! let mut list = FilterableList::new(vec![Row("Kerala", true), Row("Tamil Nadu", false)], 10);
//! let view = list.set_status_filter(StatusFilter::Active);
//! assert_eq!(view.total, 1);
//! assert_eq!(view.items[0].name(), "Kerala");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::Paginated;

/// A record that can be searched by name and filtered by activity.
pub trait Listable {
    /// Text matched by the free-text search.
    fn name(&self) -> &str;
    /// Value matched by the status filter.
    fn is_active(&self) -> bool;
}

/// Categorical filter over [`Listable::is_active`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Whether a record with the given activity passes this filter.
    pub fn admits(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Reads a query-string value, treating anything unrecognised as `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status filter `{0}`")]
pub struct UnknownStatusFilter(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            _ => Err(UnknownStatusFilter(s.to_string())),
        }
    }
}

/// Search term and status currently applied to a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// True when the criteria admit every record.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.status == StatusFilter::All
    }

    /// Evaluates both predicates against a record.
    pub fn matches<T: Listable + ?Sized>(&self, record: &T) -> bool {
        let needle = self.search_term.to_lowercase();
        Self::matches_search(&needle, record) && self.status.admits(record.is_active())
    }

    fn matches_search<T: Listable + ?Sized>(needle: &str, record: &T) -> bool {
        needle.is_empty() || record.name().to_lowercase().contains(needle)
    }
}

/// Derived state handed back after every mutation.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// Records on the current page.
    pub items: Vec<&'a T>,
    /// Current 1-indexed page number.
    pub page: usize,
    pub total_pages: usize,
    /// Number of records that passed the filters.
    pub total: usize,
    pub criteria: &'a FilterCriteria,
}

impl<T: Clone> ListView<'_, T> {
    /// Detaches the current page from the list for rendering.
    pub fn to_paginated(&self) -> Paginated<T> {
        Paginated::new(
            self.items.iter().map(|item| (*item).clone()).collect(),
            self.page,
            self.total_pages,
            self.total,
        )
    }
}

/// Immutable source collection with mutable filter criteria and page cursor.
#[derive(Debug, Clone)]
pub struct FilterableList<T> {
    source: Vec<T>,
    criteria: FilterCriteria,
    /// Indices into `source` of records passing `criteria`, ascending.
    filtered: Vec<usize>,
    page_number: usize,
    page_size: usize,
}

impl<T: Listable> FilterableList<T> {
    /// Wraps a source collection; a zero page size is treated as one.
    pub fn new(source: Vec<T>, page_size: usize) -> Self {
        let filtered = (0..source.len()).collect();
        Self {
            source,
            criteria: FilterCriteria::default(),
            filtered,
            page_number: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Records passing the current criteria, in source order.
    pub fn filtered(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.source[i]).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Replaces the search term and returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> ListView<'_, T> {
        self.criteria.search_term = term.into();
        self.recompute();
        self.view()
    }

    /// Replaces the status filter and returns to the first page.
    pub fn set_status_filter(&mut self, status: StatusFilter) -> ListView<'_, T> {
        self.criteria.status = status;
        self.recompute();
        self.view()
    }

    /// Drops both criteria, restoring the full source on page one.
    pub fn clear_filters(&mut self) -> ListView<'_, T> {
        self.criteria = FilterCriteria::default();
        self.recompute();
        self.view()
    }

    /// Moves the cursor; page zero is read as the first page.
    pub fn set_page(&mut self, page_number: usize) -> ListView<'_, T> {
        self.page_number = page_number.max(1);
        self.view()
    }

    /// Window `[(n - 1) * size, n * size)` of the filtered records.
    ///
    /// Out-of-range pages, including page zero, yield an empty window.
    pub fn get_page(&self, page_number: usize) -> Vec<&T> {
        let Some(start) = page_number
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
        else {
            return Vec::new();
        };

        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.source[i])
            .collect()
    }

    /// Derived view for the current criteria and page.
    pub fn view(&self) -> ListView<'_, T> {
        ListView {
            items: self.get_page(self.page_number),
            page: self.page_number,
            total_pages: self.total_pages(),
            total: self.filtered.len(),
            criteria: &self.criteria,
        }
    }

    fn recompute(&mut self) {
        let needle = self.criteria.search_term.to_lowercase();
        let status = self.criteria.status;
        self.filtered = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                FilterCriteria::matches_search(&needle, *record) && status.admits(record.is_active())
            })
            .map(|(i, _)| i)
            .collect();
        self.page_number = 1;
    }
}
