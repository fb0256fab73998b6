use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three content categories the API partitions posts into. The slug is
/// stable and appears verbatim in page URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Latest,
    Top,
    Hot,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Latest, Section::Top, Section::Hot];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Latest => "latest",
            Section::Top => "top",
            Section::Hot => "hot",
        }
    }

    pub fn display_title(self) -> &'static str {
        match self {
            Section::Latest => "Latest",
            Section::Top => "Top",
            Section::Hot => "Hot",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_url_stable() {
        assert_eq!(Section::Latest.slug(), "latest");
        assert_eq!(Section::Top.slug(), "top");
        assert_eq!(Section::Hot.slug(), "hot");
    }

    #[test]
    fn test_all_covers_every_section() {
        assert_eq!(Section::ALL.len(), 3);
        assert_eq!(Section::ALL[0], Section::Latest);
    }
}
