//! Per-section sequential fetch-and-cache engine.
//!
//! Each [`PostFeed`] owns one section's accumulated posts and a cursor, and
//! decides when another page is needed. Reads never perform I/O by side
//! effect: only an explicit [`PostFeed::ensure`] call may issue a fetch, at
//! most one of which is ever outstanding per section. Completions arrive on
//! an mpsc channel owned by whoever drives the feed, which hands them back to
//! [`PostFeed::apply`] — the only path that mutates the cache.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::Result;
use crate::domain::{Post, Section};
use crate::fetcher::Fetcher;
use crate::parser::PageParser;

/// Posts per page, fixed by the API's pagination arithmetic.
pub const PAGE_SIZE: usize = 5;

/// Completion of one page fetch, delivered over the feed's channel.
#[derive(Debug)]
pub struct PageOutcome {
    pub section: Section,
    pub page: u32,
    pub result: Result<Vec<Post>>,
}

/// What [`PostFeed::ensure`] can say about a requested index.
#[derive(Debug, PartialEq)]
pub enum PostSlot<'a> {
    /// The post is cached; no network involved.
    Ready(&'a Post),
    /// A fetch that may produce this index is outstanding.
    Pending,
    /// The section stopped producing posts before this index.
    Exhausted,
}

pub struct PostFeed {
    section: Section,
    base_url: String,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parser: PageParser,
    completions: mpsc::UnboundedSender<PageOutcome>,
    posts: Vec<Post>,
    seen: HashSet<u64>,
    cursor: usize,
    /// At most one outstanding fetch per section; this is the guard.
    in_flight_page: Option<u32>,
    /// Page that came back short or empty; reaching it again means the
    /// section has no more content.
    exhausted_after: Option<u32>,
}

impl PostFeed {
    pub fn new(
        section: Section,
        base_url: &url::Url,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        completions: mpsc::UnboundedSender<PageOutcome>,
    ) -> Self {
        Self {
            section,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            fetcher,
            parser: PageParser::new(),
            completions,
            posts: Vec::new(),
            seen: HashSet::new(),
            cursor: 0,
            in_flight_page: None,
            exhausted_after: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight_page.is_some()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Serve the post at `index` from cache, or arrange for it to arrive.
    ///
    /// Cache hits return synchronously. On a miss, one fetch for the next
    /// page is spawned unless a fetch is already outstanding (the pending
    /// marker is returned without issuing a second request) or that page has
    /// already proven empty (the section is exhausted).
    pub fn ensure(&mut self, index: usize) -> PostSlot<'_> {
        if index < self.posts.len() {
            return PostSlot::Ready(&self.posts[index]);
        }

        if self.in_flight_page.is_some() {
            return PostSlot::Pending;
        }

        let page = self.next_page();
        if self.exhausted_after == Some(page) {
            return PostSlot::Exhausted;
        }

        self.spawn_fetch(page);
        PostSlot::Pending
    }

    /// Merge one completed page fetch back into the cache.
    ///
    /// Clears the in-flight guard exactly once, on success or failure. A
    /// successful batch is appended in order, skipping ids already cached;
    /// the appended count is returned. A batch shorter than [`PAGE_SIZE`],
    /// or one that appended nothing new, marks the section exhausted: the
    /// cache did not grow, so fetching the same page again could only yield
    /// the same posts. A failure leaves the cache untouched, so a later
    /// `ensure` at the same index retries the same page.
    pub fn apply(&mut self, outcome: PageOutcome) -> Result<usize> {
        if self.in_flight_page != Some(outcome.page) {
            warn!(
                section = %self.section,
                page = outcome.page,
                "dropping stale page completion"
            );
            return Ok(0);
        }
        self.in_flight_page = None;

        let batch = outcome.result?;
        let short = batch.len() < PAGE_SIZE;

        let mut appended = 0;
        for post in batch {
            if self.seen.insert(post.id) {
                self.posts.push(post);
                appended += 1;
            }
        }

        if short || appended == 0 {
            self.exhausted_after = Some(self.next_page());
            debug!(section = %self.section, page = outcome.page, "section exhausted");
        }

        debug!(
            section = %self.section,
            page = outcome.page,
            appended,
            cached = self.posts.len(),
            "page merged"
        );
        Ok(appended)
    }

    /// Move the cursor by `delta`, clamping at zero; the upper bound is open,
    /// a cursor past the cache just makes the next `ensure` fetch. Returns
    /// the new cursor.
    pub fn advance(&mut self, delta: i64) -> usize {
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.cursor.saturating_add(delta as usize)
        };
        self.cursor
    }

    /// 1-based page that would extend the cache, per the API's arithmetic.
    fn next_page(&self) -> u32 {
        (self.posts.len() / PAGE_SIZE) as u32 + 1
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/{}/{}?json=true", self.base_url, self.section.slug(), page)
    }

    fn spawn_fetch(&mut self, page: u32) {
        self.in_flight_page = Some(page);

        let url = self.page_url(page);
        let section = self.section;
        let fetcher = self.fetcher.clone();
        let parser = self.parser.clone();
        let completions = self.completions.clone();

        tokio::spawn(async move {
            debug!(%url, "fetching page");
            let result = match fetcher.fetch(&url).await {
                Ok(body) => parser.parse_page(&body),
                Err(e) => Err(e),
            };

            // A closed receiver means the feed's owner is gone; the result
            // must not be delivered anywhere.
            if completions.send(PageOutcome { section, page, result }).is_err() {
                warn!(%section, page, "feed torn down before page completion");
            }
        });
    }
}
