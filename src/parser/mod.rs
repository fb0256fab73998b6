//! Decoding of developerslife.ru JSON bodies into domain posts.
//!
//! Page responses are an object with a `result` array; the single-post and
//! random endpoints return one bare post object. An empty `result` array is a
//! valid page (the section simply has no more content), not a parse failure.

use html_escape::decode_html_entities;
use serde::Deserialize;

use crate::app::{DevLifeError, Result};
use crate::domain::Post;

#[derive(Deserialize)]
struct PageBody {
    result: Vec<WirePost>,
}

#[derive(Deserialize)]
struct WirePost {
    id: u64,
    description: String,
    #[serde(rename = "gifURL")]
    gif_url: String,
}

impl From<WirePost> for Post {
    fn from(wire: WirePost) -> Self {
        Post {
            id: wire.id,
            title: decode_html_entities(&wire.description).into_owned(),
            media_url: wire.gif_url,
        }
    }
}

/// Pure, synchronous JSON decoder. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct PageParser;

impl PageParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one page response into posts, in the order the API served them.
    pub fn parse_page(&self, body: &[u8]) -> Result<Vec<Post>> {
        let page: PageBody =
            serde_json::from_slice(body).map_err(|e| DevLifeError::Parse(e.to_string()))?;

        Ok(page.result.into_iter().map(Post::from).collect())
    }

    /// Parse a single-post response (the `/{id}` and `/random` endpoints).
    pub fn parse_post(&self, body: &[u8]) -> Result<Post> {
        let wire: WirePost =
            serde_json::from_slice(body).map_err(|e| DevLifeError::Parse(e.to_string()))?;

        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SAMPLE: &str = r#"{
        "result": [
            {"id": 101, "description": "Когда пофиксил баг", "gifURL": "https://static.devli.ru/101.gif"},
            {"id": 102, "description": "", "gifURL": "https://static.devli.ru/102.gif"}
        ],
        "totalCount": 3000
    }"#;

    #[test]
    fn test_parse_page() {
        let posts = PageParser::new().parse_page(PAGE_SAMPLE.as_bytes()).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 101);
        assert_eq!(posts[0].title, "Когда пофиксил баг");
        assert_eq!(posts[0].media_url, "https://static.devli.ru/101.gif");
        assert_eq!(posts[1].title, "");
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let posts = PageParser::new().parse_page(br#"{"result": []}"#).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_missing_result_key_is_an_error() {
        let err = PageParser::new()
            .parse_page(br#"{"totalCount": 0}"#)
            .unwrap_err();
        assert!(matches!(err, DevLifeError::Parse(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = PageParser::new().parse_page(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, DevLifeError::Parse(_)));
    }

    #[test]
    fn test_element_missing_field_is_an_error() {
        let body = br#"{"result": [{"id": 5, "description": "no media"}]}"#;
        let err = PageParser::new().parse_page(body).unwrap_err();
        assert!(matches!(err, DevLifeError::Parse(_)));
    }

    #[test]
    fn test_html_entities_decoded_in_title() {
        let body = br#"{"result": [{"id": 7, "description": "C&amp;&amp;D", "gifURL": "https://x/7.gif"}]}"#;
        let posts = PageParser::new().parse_page(body).unwrap();
        assert_eq!(posts[0].title, "C&&D");
    }

    #[test]
    fn test_parse_single_post() {
        let body = br#"{"id": 9000, "description": "random one", "gifURL": "https://x/9000.gif", "author": "ignored"}"#;
        let post = PageParser::new().parse_post(body).unwrap();
        assert_eq!(post.id, 9000);
        assert_eq!(post.title, "random one");
    }
}
