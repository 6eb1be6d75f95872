//! Application state management for the storefront browser.
//!
//! This module holds the explicit state that every user event operates on:
//! the loaded catalog, the current filter and sort criteria, the derived view
//! and the pagination cursor, plus the UI mode.

use crate::domain::{
    compute_view, CatalogStore, FilterCriteria, LoadError, PageState, PaginationCursor, Product,
    SortCriteria,
};
use crate::infrastructure::FetchError;
use thiserror::Error;

/// Message shown in place of the loading indicator when the catalog is unavailable.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading products.";

/// Anything that prevents the catalog from being shown.
///
/// Both variants are surfaced to the user the same way; the distinction only
/// matters for logs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl CatalogError {
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

/// Progress of the one-time catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight
    Loading,
    /// Catalog loaded and views can be computed
    Ready,
    /// Fetch or load failed; the message is shown to the user
    Failed(String),
}

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and which widgets
/// are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the product list
    Normal,
    /// Typing into the search bar
    Search,
    /// Moving through the category selector
    Category,
    /// Help popup is displayed
    Help,
}

/// Main application state.
///
/// All catalog interaction goes through methods on this structure; there is
/// no module-level state.
///
/// # Examples
///
/// ```
/// use storefront::application::{App, LoadStatus};
///
/// let mut app = App::default();
/// assert_eq!(app.status, LoadStatus::Loading);
///
/// app.set_catalog_result(Ok(r#"[
///     {"id": 1, "title": "Blue Mug", "price": 10, "description": "", "category": "home", "image": ""}
/// ]"#.to_string()));
/// assert_eq!(app.status, LoadStatus::Ready);
/// assert_eq!(app.rendered().len(), 1);
/// assert!(!app.show_load_more());
/// ```
#[derive(Debug)]
pub struct App {
    /// Every product fetched from the catalog source
    pub catalog: CatalogStore,
    /// Current text and category criteria
    pub filter: FilterCriteria,
    /// Current price ordering
    pub sort: SortCriteria,
    /// Filtered view derived from the catalog and criteria
    pub view: Vec<Product>,
    /// Pages of the view revealed so far
    pub cursor: PaginationCursor,
    /// Catalog fetch progress
    pub status: LoadStatus,
    /// Current application mode
    pub mode: AppMode,
    /// Search bar contents while in search mode
    pub search_input: String,
    /// Cursor position within the search bar (byte offset)
    pub cursor_position: usize,
    /// Query to restore if search is cancelled
    saved_query: String,
    /// Highlighted row in the category selector
    pub category_index: usize,
    /// First rendered product visible in the list
    pub product_scroll: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_cursor(PaginationCursor::default())
    }
}

impl App {
    /// Creates an empty, loading application with a custom page size cursor.
    pub fn with_cursor(cursor: PaginationCursor) -> Self {
        Self {
            catalog: CatalogStore::default(),
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            view: Vec::new(),
            cursor,
            status: LoadStatus::Loading,
            mode: AppMode::Normal,
            search_input: String::new(),
            cursor_position: 0,
            saved_query: String::new(),
            category_index: 0,
            product_scroll: 0,
            help_scroll: 0,
            status_message: None,
        }
    }

    /// Applies the outcome of the catalog fetch.
    ///
    /// On success the catalog is loaded and the first page of the view is
    /// revealed. Any failure, transport or payload, leaves the catalog empty
    /// and switches to [`LoadStatus::Failed`]. The catalog is only ever
    /// populated once; later results are ignored.
    pub fn set_catalog_result(&mut self, result: Result<String, FetchError>) {
        if self.status != LoadStatus::Loading {
            tracing::warn!("ignoring catalog result after the catalog was settled");
            return;
        }

        match self.apply_catalog(result) {
            Ok(()) => {
                tracing::info!(count = self.catalog.len(), "products fetched");
                self.status = LoadStatus::Ready;
                self.category_index = 0;
                self.refresh_view();
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching catalog");
                self.status = LoadStatus::Failed(err.user_message().to_string());
            }
        }
    }

    fn apply_catalog(&mut self, result: Result<String, FetchError>) -> Result<(), CatalogError> {
        let body = result?;
        self.catalog.load_str(&body)?;
        Ok(())
    }

    /// Recomputes the view from scratch, resets paging and reveals the first page.
    pub fn refresh_view(&mut self) {
        self.view = compute_view(self.catalog.all(), &self.filter, self.sort)
            .into_iter()
            .cloned()
            .collect();
        self.cursor.reset();
        self.product_scroll = 0;
        self.reveal_next_page();
    }

    fn reveal_next_page(&mut self) -> usize {
        let revealed = self.cursor.next_slice(&self.view).len();
        tracing::debug!(
            page = self.cursor.page(),
            revealed,
            total = self.view.len(),
            "displaying products"
        );
        revealed
    }

    /// Reveals the next page of the current view without recomputing it.
    ///
    /// Returns the number of newly revealed products, zero once exhausted.
    pub fn load_more(&mut self) -> usize {
        let revealed = self.reveal_next_page();
        if revealed == 0 {
            self.status_message = Some("No more products".to_string());
        }
        revealed
    }

    /// Products currently revealed to the user.
    pub fn rendered(&self) -> &[Product] {
        &self.view[..self.cursor.rendered_len(self.view.len())]
    }

    /// Whether the "load more" control should be offered.
    pub fn show_load_more(&self) -> bool {
        self.cursor.has_more(&self.view)
    }

    pub fn page_state(&self) -> PageState {
        self.cursor.state(&self.view)
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
        self.refresh_view();
    }

    /// Single-select category toggle; toggling the selected category shows all.
    pub fn toggle_category(&mut self, label: &str) {
        self.filter.toggle_category(label);
        self.refresh_view();
    }

    pub fn clear_category(&mut self) {
        self.filter.category = None;
        self.refresh_view();
    }

    pub fn set_sort(&mut self, sort: SortCriteria) {
        self.sort = sort;
        self.status_message = Some(format!("Sort: {}", sort.label()));
        self.refresh_view();
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    /// Switches to search mode, editing the current query.
    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
        self.saved_query = self.filter.query.clone();
        self.search_input = self.filter.query.clone();
        self.cursor_position = self.search_input.len();
        self.status_message = None;
    }

    /// Inserts `c` at the cursor and re-runs the search.
    pub fn insert_search_char(&mut self, c: char) {
        self.search_input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.apply_search_input();
    }

    /// Deletes the character before the cursor and re-runs the search.
    pub fn delete_search_char_before(&mut self) {
        if let Some(c) = self.search_input[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
            self.search_input.remove(self.cursor_position);
            self.apply_search_input();
        }
    }

    /// Deletes the character under the cursor and re-runs the search.
    pub fn delete_search_char_at(&mut self) {
        if self.cursor_position < self.search_input.len() {
            self.search_input.remove(self.cursor_position);
            self.apply_search_input();
        }
    }

    pub fn move_search_cursor_left(&mut self) {
        if let Some(c) = self.search_input[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    pub fn move_search_cursor_right(&mut self) {
        if let Some(c) = self.search_input[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn move_search_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_search_cursor_end(&mut self) {
        self.cursor_position = self.search_input.len();
    }

    fn apply_search_input(&mut self) {
        let query = self.search_input.clone();
        self.set_query(&query);
    }

    /// Keeps the typed query and returns to normal mode.
    pub fn finish_search(&mut self) {
        self.mode = AppMode::Normal;
        self.search_input.clear();
        self.cursor_position = 0;
    }

    /// Restores the query from before search mode and returns to normal mode.
    pub fn cancel_search(&mut self) {
        let saved = std::mem::take(&mut self.saved_query);
        if self.filter.query != saved {
            self.set_query(&saved);
        }
        self.finish_search();
    }

    /// Opens the category selector with the highlight on the selected category.
    pub fn start_category_select(&mut self) {
        self.mode = AppMode::Category;
        self.category_index = self
            .filter
            .category
            .as_ref()
            .and_then(|selected| self.catalog.categories().iter().position(|c| c == selected))
            .unwrap_or(0);
        self.status_message = None;
    }

    pub fn finish_category_select(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn move_category_highlight_up(&mut self) {
        self.category_index = self.category_index.saturating_sub(1);
    }

    pub fn move_category_highlight_down(&mut self) {
        let count = self.catalog.categories().len();
        if self.category_index + 1 < count {
            self.category_index += 1;
        }
    }

    /// Toggles the highlighted category. Does nothing while no categories exist.
    pub fn toggle_highlighted_category(&mut self) {
        if let Some(label) = self.catalog.categories().get(self.category_index).cloned() {
            self.toggle_category(&label);
        }
    }

    pub fn scroll_products_up(&mut self) {
        self.product_scroll = self.product_scroll.saturating_sub(1);
    }

    pub fn scroll_products_down(&mut self) {
        if self.product_scroll + 1 < self.rendered().len() {
            self.product_scroll += 1;
        }
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }
}
