pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// One HTTP GET, no retries. The single seam the feed engine talks to the
/// network through, so tests can script responses instead.
#[async_trait]
pub trait Fetcher {
    /// Fetch `url` and return the raw response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
