//
//  pagerduty-backend
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination for PagerDuty list endpoints
//!
//! PagerDuty's classic pagination is offset based: the client sends `offset`
//! and `limit`, and every page echoes them back together with a `more` flag
//! and, when `total=true` was requested, the total number of records.
//!
//! Two termination strategies are in use:
//!
//! | Strategy | Continue while |
//! |----------|----------------|
//! | [`Termination::MoreFlag`] | the page reports `more: true` |
//! | [`Termination::RunningTotal`] | the running offset is below the first page's `total` |
//!
//! [`Paginator::drain`] implements both behind one loop. Pages are fetched
//! strictly one after another because whether to continue is only known
//! once the previous page has arrived. The first failing page aborts the
//! whole drain and nothing fetched so far is returned.
//!
//! # Example
//!
//! ```rust
//! use pagerduty_backend::api::common::{PageInfo, Paginated, Paginator, Termination};
//!
//! struct Numbers {
//!     info: PageInfo,
//!     values: Vec<u32>,
//! }
//!
//! impl Paginated for Numbers {
//!     type Item = u32;
//!     fn page_info(&self) -> &PageInfo { &self.info }
//!     fn into_items(self) -> Vec<u32> { self.values }
//! }
//!
//! # tokio_test_block_on(async {
//! let paginator = Paginator::new(Termination::MoreFlag).with_limit(2);
//! let all = paginator
//!     .drain(|offset, _limit| async move {
//!         let more = offset == 0;
//!         Ok(Numbers {
//!             info: PageInfo { more: Some(more), ..Default::default() },
//!             values: vec![offset, offset + 1],
//!         })
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(all, vec![0, 1, 2, 3]);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::ApiError;

/// Page size used by every paginated operation.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Pagination metadata PagerDuty returns alongside each page.
///
/// Flattened into the concrete response types, e.g.
/// `{"escalation_policies": [...], "offset": 0, "limit": 50, "more": true, "total": 120}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Offset the page starts at.
    #[serde(default)]
    pub offset: u32,

    /// Page size the server applied.
    #[serde(default)]
    pub limit: u32,

    /// Whether more records exist after this page.
    #[serde(default)]
    pub more: Option<bool>,

    /// Total record count; only present when `total=true` was requested.
    #[serde(default)]
    pub total: Option<u32>,
}

/// A single decoded page of a list endpoint.
pub trait Paginated {
    /// Record type carried by the page.
    type Item;

    /// Pagination metadata of this page.
    fn page_info(&self) -> &PageInfo;

    /// Consumes the page, yielding its records in order.
    fn into_items(self) -> Vec<Self::Item>;
}

/// When to stop requesting pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop when a page reports `more` as false or absent.
    MoreFlag,
    /// Stop once the running offset reaches the total reported by the first page.
    RunningTotal,
}

impl Termination {
    /// Decides whether another page should be requested.
    ///
    /// # Parameters
    ///
    /// * `info` - metadata of the page just received
    /// * `next_offset` - offset the next request would use
    /// * `first_total` - total reported by the first page
    pub fn has_more(self, info: &PageInfo, next_offset: u32, first_total: Option<u32>) -> bool {
        match self {
            Self::MoreFlag => info.more.unwrap_or(false),
            Self::RunningTotal => next_offset < first_total.unwrap_or(0),
        }
    }
}

/// Drains an offset/limit endpoint into one ordered collection.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    limit: u32,
    termination: Termination,
}

impl Paginator {
    /// Creates a paginator with [`DEFAULT_PAGE_SIZE`].
    pub fn new(termination: Termination) -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            termination,
        }
    }

    /// Overrides the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Fetches pages from offset 0 until the termination strategy says stop.
    ///
    /// `fetch` receives `(offset, limit)` and returns one decoded page. Pages
    /// are appended in the order received.
    ///
    /// # Errors
    ///
    /// Returns the first page error unchanged; pages already received are
    /// dropped.
    ///
    /// Under [`Termination::MoreFlag`] an empty page that still reports
    /// `more` ends the drain early. Under [`Termination::RunningTotal`] empty
    /// pages are skipped over until the first page's total is reached.
    pub async fn drain<P, F, Fut>(&self, mut fetch: F) -> Result<Vec<P::Item>, ApiError>
    where
        P: Paginated,
        F: FnMut(u32, u32) -> Fut,
        Fut: Future<Output = Result<P, ApiError>>,
    {
        let mut items = Vec::new();
        let mut offset = 0u32;
        let mut first_total = None;

        loop {
            let page = fetch(offset, self.limit).await?;
            let info = page.page_info().clone();
            if first_total.is_none() {
                first_total = Some(info.total.unwrap_or(0));
            }

            let received = page.into_items();
            let count = received.len();
            items.extend(received);

            tracing::debug!(offset, count, more = ?info.more, total = ?info.total, "received page");

            offset = offset.saturating_add(self.limit);
            if !self.termination.has_more(&info, offset, first_total) {
                break;
            }

            // An empty page that still claims more would never terminate.
            // The running total is bounded by the offset and keeps going.
            if count == 0 && self.termination == Termination::MoreFlag {
                tracing::warn!(offset, "upstream reported more records but sent an empty page");
                break;
            }
        }

        Ok(items)
    }
}
