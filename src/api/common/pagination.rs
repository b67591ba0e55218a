//
//  dockerhub
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! List envelope returned by Docker Hub collection endpoints.
//!
//! Docker Hub wraps every list in the same shape:
//!
//! ```json
//! {"count": 2, "next": null, "previous": null, "results": [...]}
//! ```
//!
//! The client only ever returns the page it was handed. Following `next`
//! is left to the caller.

use serde::{Deserialize, Serialize};

/// A single page of a Docker Hub collection.
///
/// # Example
///
/// ```rust
/// use dockerhub::api::common::Page;
///
/// let json = r#"{"count": 1, "next": null, "previous": null, "results": ["a"]}"#;
/// let page: Page<String> = serde_json::from_str(json).unwrap();
/// assert_eq!(page.results, vec!["a".to_string()]);
/// assert!(!page.has_next());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// Absolute URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether Docker Hub reported a further page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the absolute URL of the next page.
    ///
    /// # Returns
    ///
    /// `None` on the last page. The URL already carries the page number and
    /// page size.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}
