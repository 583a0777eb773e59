//! Cursor-based pagination over the post listing.
//!
//! Pages are fetched with a limit of `page_size + 1`: the extra row is never
//! shown, its presence only tells us a further page exists. Backward
//! navigation replays the first boundary of each earlier page from a stack.

use std::sync::Arc;

use crate::controllers::Step;
use crate::domain::{Post, PostId};
use crate::error::StoreError;
use crate::ports::{Boundary, Notifier, PostQuery, PostStore};

const FETCH_FAILED: &str = "Failed to fetch blog posts.";

/// Trim an over-fetched page to `page_size` rows.
///
/// Returns the visible rows and whether a further page exists.
pub fn split_page(mut rows: Vec<Post>, page_size: usize) -> (Vec<Post>, bool) {
    if rows.len() > page_size {
        rows.truncate(page_size);
        (rows, true)
    } else {
        (rows, false)
    }
}

/// List view controller: one page of posts plus the cursors to move around.
pub struct Paginator {
    store: Arc<dyn PostStore>,
    notifier: Arc<dyn Notifier>,
    page_size: usize,
    rows: Vec<Post>,
    first: Option<Boundary>,
    last: Option<Boundary>,
    history: Vec<Boundary>,
    is_first_page: bool,
    is_last_page: bool,
}

impl Paginator {
    pub fn new(store: Arc<dyn PostStore>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            store,
            notifier,
            page_size: page_size.max(1),
            rows: Vec::new(),
            first: None,
            last: None,
            history: Vec::new(),
            is_first_page: true,
            is_last_page: true,
        }
    }

    /// Initial load: forget history and fetch the newest page.
    pub async fn mount(&mut self) -> Step {
        self.history.clear();
        self.is_first_page = true;

        match self.fetch(PostQuery::first(self.page_size + 1)).await {
            Ok((rows, has_next)) => {
                self.show(rows, has_next);
                Step::Applied
            }
            Err(e) => {
                self.report(&e);
                self.show(Vec::new(), false);
                Step::Failed
            }
        }
    }

    /// Move to the next page. A no-op on the last page.
    pub async fn next_page(&mut self) -> Step {
        if self.is_last_page {
            return Step::Skipped;
        }
        let Some(last) = self.last.clone() else {
            return Step::Skipped;
        };

        match self.fetch(PostQuery::after(last, self.page_size + 1)).await {
            Ok((rows, has_next)) => {
                if let Some(first) = self.first.take() {
                    self.history.push(first);
                }
                self.is_first_page = false;
                self.show(rows, has_next);
                tracing::debug!(page = self.page_number(), "Moved to next page");
                Step::Applied
            }
            Err(e) => {
                self.report(&e);
                Step::Failed
            }
        }
    }

    /// Move back one page. A no-op on the first page.
    pub async fn previous_page(&mut self) -> Step {
        let Some(start) = self.history.last().cloned() else {
            return Step::Skipped;
        };

        match self.fetch(PostQuery::at(start, self.page_size + 1)).await {
            Ok((rows, has_next)) => {
                self.history.pop();
                self.is_first_page = self.history.is_empty();
                self.show(rows, has_next);
                tracing::debug!(page = self.page_number(), "Moved to previous page");
                Step::Applied
            }
            Err(e) => {
                self.report(&e);
                Step::Failed
            }
        }
    }

    /// Drop a row from the current page after it was deleted from the store.
    pub fn remove(&mut self, id: &PostId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|p| &p.id != id);
        self.rows.len() != before
    }

    pub fn rows(&self) -> &[Post] {
        &self.rows
    }

    pub fn first_boundary(&self) -> Option<&Boundary> {
        self.first.as_ref()
    }

    pub fn last_boundary(&self) -> Option<&Boundary> {
        self.last.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// One-based page number.
    pub fn page_number(&self) -> usize {
        self.history.len() + 1
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_first_page(&self) -> bool {
        self.is_first_page
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    async fn fetch(&self, query: PostQuery) -> Result<(Vec<Post>, bool), StoreError> {
        let rows = self.store.query(&query).await?;
        Ok(split_page(rows, self.page_size))
    }

    fn show(&mut self, rows: Vec<Post>, has_next: bool) {
        self.first = rows.first().map(Boundary::of);
        self.last = rows.last().map(Boundary::of);
        self.is_last_page = !has_next;
        self.rows = rows;
    }

    fn report(&self, err: &StoreError) {
        tracing::error!(error = %err, "Error fetching blog posts");
        self.notifier.error(FETCH_FAILED);
    }
}
