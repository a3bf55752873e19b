//! Search and page state mirrored into the URL query string.
//!
//! The query string is the single source of truth for what is displayed:
//! `parse` is invoked when a view is mounted and `serialize`/`apply_to` when
//! the state changes, so the state survives refreshes and can be shared as a
//! link.
use std::convert::TryFrom;
use url::form_urlencoded;

pub const PAGE_SIZE: u64 = 10;

pub const SEARCH_PARAM: &'static str = "search";
pub const PAGE_PARAM: &'static str = "page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub search: String,
    pub page: u32
}

impl Default for PageState {
    fn default() -> Self {
        PageState { search: String::new(), page: 1 }
    }
}

// Digits beyond u32 saturate, anything else that is not a positive integer means 1
fn parse_page(raw: &str) -> u32 {
    let raw = raw.trim();
    match raw.parse::<u32>() {
        Ok(page) => page.max(1),
        Err(_) if !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit()) => u32::MAX,
        Err(_) => 1
    }
}

impl PageState {
    /// Read `search` and `page` from a query string, with or without its leading `?`
    ///
    /// The first occurrence of each parameter wins. A page that is not a positive integer falls back to 1,
    /// one too large for a `u32` is capped at `u32::MAX`.
    pub fn parse(query: &str) -> PageState {
        let query = query.trim_start_matches('?');
        let mut search = None;
        let mut page = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                SEARCH_PARAM if search.is_none() => search = Some(value.into_owned()),
                PAGE_PARAM if page.is_none() => page = Some(parse_page(&value)),
                _ => ()
            }
        }
        PageState { search: search.unwrap_or_default(), page: page.unwrap_or(1) }
    }

    /// `search` is left out when there is no filter
    pub fn serialize(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        serializer.finish()
    }

    /// Rewrite `search` and `page` in an existing query string, keeping every other parameter in place
    pub fn apply_to(&self, query: &str) -> String {
        let query = query.trim_start_matches('?');
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key != SEARCH_PARAM && key != PAGE_PARAM {
                serializer.append_pair(&key, &value);
            }
        }
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        serializer.finish()
    }

    /// Zero based index sent to the attendee list endpoint
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

pub fn total_pages(total: u64) -> u64 {
    total / PAGE_SIZE + u64::from(total % PAGE_SIZE != 0)
}

/// Which navigation controls are usable for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub page: u32,
    pub total_pages: u64
}

impl Navigation {
    pub fn new(page: u32, total_pages: u64) -> Self {
        Navigation { page, total_pages }
    }

    pub fn first_disabled(&self) -> bool {
        self.page == 1
    }

    pub fn previous_disabled(&self) -> bool {
        self.page == 1
    }

    pub fn next_disabled(&self) -> bool {
        u64::from(self.page) == self.total_pages
    }

    pub fn last_disabled(&self) -> bool {
        u64::from(self.page) == self.total_pages
    }
}

/// Owns the current `PageState` and the transitions the list view can trigger.
///
/// Navigation helpers do not consult `Navigation`: keeping them within bounds
/// is left to the controls that call them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStateController {
    state: PageState
}

impl PageStateController {
    pub fn new(state: PageState) -> Self {
        PageStateController { state }
    }

    pub fn from_query(query: &str) -> Self {
        PageStateController::new(PageState::parse(query))
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// A new search always starts back at the first page
    pub fn set_search(&mut self, search: &str) {
        self.state.search = search.to_owned();
        self.state.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.state.page = page.max(1);
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn previous_page(&mut self) {
        let page = self.state.page.saturating_sub(1);
        self.set_page(page);
    }

    pub fn next_page(&mut self) {
        let page = self.state.page.saturating_add(1);
        self.set_page(page);
    }

    pub fn last_page(&mut self, total_pages: u64) {
        let page = u32::try_from(total_pages).unwrap_or(u32::MAX);
        self.set_page(page);
    }

    pub fn navigation(&self, total: u64) -> Navigation {
        Navigation::new(self.state.page, total_pages(total))
    }

    pub fn query_string(&self) -> String {
        self.state.serialize()
    }

    /// Current state written over `query`, see `PageState::apply_to`
    pub fn location(&self, query: &str) -> String {
        self.state.apply_to(query)
    }
}
