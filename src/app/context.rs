use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use url::Url;

use crate::app::Result;
use crate::config::Config;
use crate::feed::PageOutcome;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::parser::PageParser;
use crate::tabs::TabController;

/// Wires together the fetcher, parser, and configuration. Constructed once in
/// `main` and borrowed by every command.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub parser: PageParser,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(
            Duration::from_secs(config.timeout_secs),
        ));

        Self {
            config,
            fetcher,
            parser: PageParser::new(),
        }
    }

    pub fn base_url(&self) -> Result<Url> {
        self.config.base_url()
    }

    /// Build a tab controller over all sections, plus the receiver its feeds
    /// deliver page completions on.
    pub fn tabs(&self) -> Result<(TabController, mpsc::UnboundedReceiver<PageOutcome>)> {
        let base_url = self.base_url()?;
        let (tx, rx) = mpsc::unbounded_channel();
        let tabs = TabController::new(&base_url, self.fetcher.clone(), tx);
        Ok((tabs, rx))
    }
}
