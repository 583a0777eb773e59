//! Admin dashboard: paged listing, in-memory search and two-phase delete.

use std::sync::Arc;

use crate::controllers::delete::{ConfirmPrompt, DeleteFlow};
use crate::controllers::pagination::Paginator;
use crate::controllers::search::SearchResults;
use crate::controllers::Step;
use crate::domain::{Post, PostId};
use crate::ports::{Notifier, PostQuery, PostStore};

pub struct Dashboard {
    store: Arc<dyn PostStore>,
    notifier: Arc<dyn Notifier>,
    pages: Paginator,
    search: Option<SearchResults>,
    delete: DeleteFlow,
}

impl Dashboard {
    pub fn new(store: Arc<dyn PostStore>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        let pages = Paginator::new(store.clone(), notifier.clone(), page_size);
        Self {
            store,
            notifier,
            pages,
            search: None,
            delete: DeleteFlow::default(),
        }
    }

    /// Load the first page and reset search and delete state.
    pub async fn mount(&mut self) -> Step {
        self.search = None;
        self.delete = DeleteFlow::default();
        self.pages.mount().await
    }

    pub async fn next_page(&mut self) -> Step {
        self.pages.next_page().await
    }

    pub async fn previous_page(&mut self) -> Step {
        self.pages.previous_page().await
    }

    /// Search every post for `query`. Blank queries are ignored.
    pub async fn search(&mut self, query: &str) -> Step {
        let query = query.trim();
        if query.is_empty() {
            return Step::Skipped;
        }

        match self.store.query(&PostQuery::everything()).await {
            Ok(all) => {
                let scanned = all.len();
                let results = SearchResults::filter(query, all);
                tracing::debug!(query, scanned, matched = results.rows.len(), "Search complete");
                self.search = Some(results);
                Step::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, query, "Error searching blog posts");
                self.notifier.error("Failed to search blog posts.");
                Step::Failed
            }
        }
    }

    /// Leave search mode and show the current page again.
    pub fn clear_search(&mut self) -> Step {
        match self.search.take() {
            Some(_) => Step::Applied,
            None => Step::Skipped,
        }
    }

    /// Rows currently on screen: search results if searching, else the page.
    pub fn visible(&self) -> &[Post] {
        match &self.search {
            Some(results) => &results.rows,
            None => self.pages.rows(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn search_results(&self) -> Option<&SearchResults> {
        self.search.as_ref()
    }

    pub fn pages(&self) -> &Paginator {
        &self.pages
    }

    /// First phase of delete: remember the target and open the prompt.
    pub fn request_delete(&mut self, id: PostId) {
        self.delete.select(id);
    }

    pub fn cancel_delete(&mut self) -> Step {
        match self.delete.cancel() {
            Some(_) => Step::Applied,
            None => Step::Skipped,
        }
    }

    pub fn delete_prompt(&self) -> Option<ConfirmPrompt> {
        self.delete.prompt()
    }

    pub fn pending_delete(&self) -> Option<&PostId> {
        self.delete.pending()
    }

    /// Second phase of delete. In-memory lists change only once the store
    /// has confirmed the delete.
    pub async fn confirm_delete(&mut self) -> Step {
        let Some(id) = self.delete.take_confirmed() else {
            return Step::Skipped;
        };

        match self.store.delete(&id).await {
            Ok(()) => {
                self.pages.remove(&id);
                if let Some(results) = self.search.as_mut() {
                    results.remove(&id);
                }
                tracing::info!(post_id = %id, "Blog post deleted");
                self.notifier.success("Blog post deleted successfully.");
                Step::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, post_id = %id, "Error deleting blog post");
                self.notifier.error("Failed to delete blog post.");
                Step::Failed
            }
        }
    }
}
