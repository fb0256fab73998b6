//! # devlife
//!
//! A UI-agnostic client core for the public `developerslife.ru` API, plus a
//! small CLI that drives it.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → PageParser → PostFeed → TabController → consumer
//! ```
//!
//! The heart of the crate is [`feed::PostFeed`], a per-section pagination
//! engine: an append-only cache of posts, a cursor, and an at-most-one
//! outstanding page fetch. Everything above it is plumbing; everything below
//! it is one HTTP GET at a time.
//!
//! ## Quick start
//!
//! ```bash
//! # Print the first ten posts of a section
//! devlife show latest
//!
//! # Fetch one post by id, or a random one
//! devlife post 15455
//! devlife random
//!
//! # Browse all three sections interactively
//! devlife browse
//! ```

/// Application context and error types.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration, loaded from `~/.config/devlife/config.toml`.
pub mod config;

/// Core domain models: [`Post`](domain::Post) and [`Section`](domain::Section).
pub mod domain;

/// The per-section fetch-and-cache engine, [`PostFeed`](feed::PostFeed).
pub mod feed;

/// HTTP fetching behind the [`Fetcher`](fetcher::Fetcher) trait.
pub mod fetcher;

/// JSON decoding of API responses.
pub mod parser;

/// Tab-level driver holding one feed per section.
pub mod tabs;
