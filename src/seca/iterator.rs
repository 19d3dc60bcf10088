//! Lazy iteration over skip-token paged listings
//!
//! A [`PagingIterator`] wraps a caller-supplied `fetch_page` function and hands
//! out one item at a time, fetching the next page only once the current one has
//! been consumed. Iteration ends when a page comes back without a continuation
//! token and its items have been handed out.

use futures::future::BoxFuture;
use futures::stream::{self, Stream};
use log::debug;
use std::collections::VecDeque;
use std::future::Future;

use crate::error::Result;

/// A single page returned by a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items of this page, in server order
    pub items: Vec<T>,
    /// Opaque token for the next page; `None` on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// A page with no successor
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

type FetchPage<T> = Box<dyn Fn(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

/// Single-pass iterator over a paged listing
///
/// Not rewindable: build a new iterator to list again. `next` takes `&mut self`,
/// so concurrent consumers have to serialize access themselves.
pub struct PagingIterator<T> {
    fetch_page: FetchPage<T>,
    /// Unconsumed remainder of the most recently fetched page
    buffer: VecDeque<T>,
    continuation_token: Option<String>,
    started: bool,
    pages_fetched: usize,
}

impl<T: Send + 'static> PagingIterator<T> {
    /// Create an iterator around a page fetcher
    ///
    /// The fetcher receives `None` for the first page and the previous page's
    /// continuation token afterwards. Page size is entirely up to the fetcher.
    pub fn new<F, Fut>(fetch_page: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch_page: Box::new(move |token| Box::pin(fetch_page(token))),
            buffer: VecDeque::new(),
            continuation_token: None,
            started: false,
            pages_fetched: 0,
        }
    }

    /// Return the next item, or `Ok(None)` at the end of the sequence
    ///
    /// A fetch error is returned unchanged and leaves the iterator as it was,
    /// so calling `next` again re-issues the same fetch. The same holds when the
    /// returned future is dropped mid-fetch.
    pub async fn next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if self.is_exhausted() {
                return Ok(None);
            }

            let token = self.continuation_token.clone();
            debug!(
                "Fetching page {} (continuation token: {:?})",
                self.pages_fetched + 1,
                token
            );

            let page = (self.fetch_page)(token).await?;

            self.started = true;
            self.pages_fetched += 1;
            // Empty tokens are treated like a missing one
            self.continuation_token = page.next_token.filter(|t| !t.is_empty());
            self.buffer = page.items.into();

            debug!(
                "Page {} returned {} items, more pages: {}",
                self.pages_fetched,
                self.buffer.len(),
                self.continuation_token.is_some()
            );
        }
    }

    /// Drain the iterator into a vector, preserving fetch order
    ///
    /// Stops at the first error; items collected so far are discarded.
    pub async fn all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        debug!(
            "Collected {} items from {} pages",
            items.len(),
            self.pages_fetched
        );
        Ok(items)
    }

    /// Expose the iterator as a stream that ends after the first error
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        stream::unfold(Some(self), |state| async move {
            let Some(mut iter) = state else {
                return None;
            };
            match iter.next().await {
                Ok(Some(item)) => Some((Ok(item), Some(iter))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

impl<T> PagingIterator<T> {
    /// True once the last page has been fetched and fully consumed
    pub fn is_exhausted(&self) -> bool {
        self.started && self.continuation_token.is_none() && self.buffer.is_empty()
    }

    /// Number of successful page fetches so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<T> std::fmt::Debug for PagingIterator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingIterator")
            .field("buffered", &self.buffer.len())
            .field("continuation_token", &self.continuation_token)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}
