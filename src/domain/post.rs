use serde::{Deserialize, Serialize};

/// One post as served by the API. Identity is `id`; two posts with the same
/// id are the same post, which is what the feed cache de-duplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Caption text; the API frequently serves posts with an empty one.
    pub title: String,
    /// URL of the gif/image the post displays.
    pub media_url: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            media_url: media_url.into(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_with_caption() {
        let post = Post::new(42, "Deploy Friday", "https://example.com/a.gif");
        assert_eq!(post.display_title(), "Deploy Friday");
    }

    #[test]
    fn test_display_title_empty_caption() {
        let post = Post::new(42, "", "https://example.com/a.gif");
        assert_eq!(post.display_title(), "(untitled)");
    }
}
