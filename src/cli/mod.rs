pub mod commands;

use clap::{Parser, Subcommand};

use crate::domain::Section;

#[derive(Parser)]
#[command(name = "devlife")]
#[command(about = "Browse developerslife.ru posts from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print posts from a section
    Show {
        /// Section to read
        #[arg(value_enum)]
        section: Section,

        /// How many posts to print
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Fetch a single post by id
    Post {
        /// Post id
        id: u64,
    },
    /// Fetch one random post
    Random,
    /// Interactively browse the three sections
    Browse,
}
