//! Pagination utilities for Redmine API requests and responses.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Pagination parameters sent with a list request.
///
/// `None` means the parameter is not sent and the server default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Pagination {
    /// Pagination that sends neither `limit` nor `offset`.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// Pagination for an explicit window.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Pagination envelope reported alongside every list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

/// A page of results from the Redmine API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Page size the server applied.
    pub limit: u32,
    /// Offset of the first item on this page.
    pub offset: u32,
}

impl<T> Page<T> {
    /// Create a new page from items and the server's pagination envelope.
    #[must_use]
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self {
            items,
            total_count: info.total_count,
            limit: info.limit,
            offset: info.offset,
        }
    }

    /// Whether items remain beyond this page.
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + (self.items.len() as u64) < self.total_count
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Number of pages needed to cover `total_count` items.
///
/// Never less than one, so an empty collection still costs one request.
pub fn page_count(total_count: u64, page_size: NonZeroU32) -> u64 {
    match total_count {
        0 => 1,
        n => 1 + (n - 1) / u64::from(page_size.get()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, size(2)), 1);
        assert_eq!(page_count(1, size(2)), 1);
        assert_eq!(page_count(2, size(2)), 1);
        assert_eq!(page_count(5, size(2)), 3);
        assert_eq!(page_count(250, size(100)), 3);
        assert_eq!(page_count(300, size(100)), 3);
    }

    #[test]
    fn test_page_has_more() {
        let info = PageInfo {
            total_count: 250,
            limit: 100,
            offset: 0,
        };
        let page: Page<i32> = Page::new(vec![1; 100], info);
        assert!(page.has_more());

        let info = PageInfo {
            total_count: 250,
            limit: 100,
            offset: 200,
        };
        let page: Page<i32> = Page::new(vec![1; 50], info);
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_map() {
        let info = PageInfo {
            total_count: 3,
            limit: 25,
            offset: 0,
        };
        let page = Page::new(vec![1, 2, 3], info);
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.total_count, 3);
    }

    #[test]
    fn test_unset_pagination() {
        let unset = Pagination::unset();
        assert_eq!(unset, Pagination::default());
        assert_eq!(serde_json::to_value(unset).unwrap(), serde_json::json!({}));
    }
}
