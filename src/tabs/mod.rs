//! Tab-level driver over one [`PostFeed`] per section.
//!
//! Switching tabs never resets a feed; each section keeps its own cache and
//! cursor for the life of the process.

use std::sync::Arc;

use tokio::sync::mpsc;
use url::Url;

use crate::app::Result;
use crate::domain::Section;
use crate::feed::{PageOutcome, PostFeed, PostSlot};
use crate::fetcher::Fetcher;

pub struct TabController {
    feeds: Vec<PostFeed>,
    active: usize,
}

impl TabController {
    /// One feed per entry of [`Section::ALL`], all reporting completions to
    /// the same channel.
    pub fn new(
        base_url: &Url,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        completions: mpsc::UnboundedSender<PageOutcome>,
    ) -> Self {
        let feeds = Section::ALL
            .iter()
            .map(|&section| {
                PostFeed::new(section, base_url, fetcher.clone(), completions.clone())
            })
            .collect();

        Self { feeds, active: 0 }
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.feeds.iter().map(|f| f.section())
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn active_section(&self) -> Section {
        self.feeds[self.active].section()
    }

    pub fn active_feed(&self) -> &PostFeed {
        &self.feeds[self.active]
    }

    /// Switch the visible tab. Feeds are untouched, so every section's cache
    /// and cursor survive the switch. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, index: usize) {
        if index < self.feeds.len() {
            self.active = index;
        }
    }

    /// Resolve the active tab's current post, fetching if needed.
    pub fn current(&mut self) -> PostSlot<'_> {
        let feed = &mut self.feeds[self.active];
        let cursor = feed.cursor();
        feed.ensure(cursor)
    }

    /// Step the active tab's cursor forward; returns the new cursor.
    pub fn next(&mut self) -> usize {
        self.feeds[self.active].advance(1)
    }

    /// Step the active tab's cursor back, clamped at zero.
    pub fn previous(&mut self) -> usize {
        self.feeds[self.active].advance(-1)
    }

    /// Route a page completion to the feed of its section, regardless of
    /// which tab is visible.
    pub fn apply(&mut self, outcome: PageOutcome) -> Result<usize> {
        match self
            .feeds
            .iter_mut()
            .find(|f| f.section() == outcome.section)
        {
            Some(feed) => feed.apply(outcome),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;

    fn tabs_with_mock() -> (
        TabController,
        Arc<MockFetcher>,
        mpsc::UnboundedReceiver<PageOutcome>,
    ) {
        let fetcher = Arc::new(MockFetcher::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let base = Url::parse("https://example.com").unwrap();
        let tabs = TabController::new(&base, fetcher.clone(), tx);
        (tabs, fetcher, rx)
    }

    fn five_posts(start: u64) -> Vec<(u64, String, String)> {
        (start..start + 5)
            .map(|id| (id, format!("post {id}"), format!("https://x/{id}.gif")))
            .collect()
    }

    fn push_page(fetcher: &MockFetcher, start: u64) {
        let posts = five_posts(start);
        let borrowed: Vec<(u64, &str, &str)> = posts
            .iter()
            .map(|(id, d, g)| (*id, d.as_str(), g.as_str()))
            .collect();
        fetcher.push_page(&borrowed);
    }

    #[tokio::test]
    async fn test_one_feed_per_section() {
        let (tabs, _, _rx) = tabs_with_mock();
        let sections: Vec<_> = tabs.sections().collect();
        assert_eq!(sections, vec![Section::Latest, Section::Top, Section::Hot]);
    }

    #[tokio::test]
    async fn test_tab_switch_preserves_progress() {
        let (mut tabs, fetcher, mut rx) = tabs_with_mock();

        // Load latest's first page and walk to index 2.
        push_page(&fetcher, 1);
        assert_eq!(tabs.current(), PostSlot::Pending);
        let outcome = rx.recv().await.unwrap();
        tabs.apply(outcome).unwrap();
        tabs.next();
        tabs.next();
        assert_eq!(tabs.active_feed().cursor(), 2);

        // Visit hot, then come back: latest's cursor and cache are intact.
        tabs.select_tab(2);
        assert_eq!(tabs.active_section(), Section::Hot);
        assert_eq!(tabs.active_feed().cursor(), 0);

        tabs.select_tab(0);
        assert_eq!(tabs.active_feed().cursor(), 2);
        match tabs.current() {
            PostSlot::Ready(post) => assert_eq!(post.id, 3),
            other => panic!("expected cached post, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_completion_routed_to_hidden_tab() {
        let (mut tabs, fetcher, mut rx) = tabs_with_mock();

        push_page(&fetcher, 100);
        tabs.select_tab(1);
        assert_eq!(tabs.current(), PostSlot::Pending);

        // The user flips away before the page lands.
        tabs.select_tab(0);
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.section, Section::Top);
        tabs.apply(outcome).unwrap();

        tabs.select_tab(1);
        assert_eq!(tabs.active_feed().len(), 5);
    }

    #[tokio::test]
    async fn test_previous_clamps_at_first_post() {
        let (mut tabs, _, _rx) = tabs_with_mock();
        assert_eq!(tabs.previous(), 0);
        assert_eq!(tabs.next(), 1);
        assert_eq!(tabs.previous(), 0);
        assert_eq!(tabs.previous(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_tab_ignored() {
        let (mut tabs, _, _rx) = tabs_with_mock();
        tabs.select_tab(7);
        assert_eq!(tabs.active_tab(), 0);
    }
}
