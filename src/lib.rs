//! Extract NBA 2K player ratings from the markdown rendering of 2kratings.com pages.
//!
//! Pages are fetched through a render proxy that returns markdown; the
//! extractors in this crate turn that markdown into a [`PlayerRecord`].

mod client;
mod config;
mod display;
mod error;
mod model;
mod scraper;
pub mod store;

pub use client::RatingsClient;
pub use config::*;
pub use error::{RatingsError, Result};
pub use model::*;
pub use scraper::player::parse_player_page;
pub use scraper::read_local_document;

/// Read a saved page from disk and extract its record.
///
/// The record's source URL is `file://<path>`.
pub fn parse_local_file(path: impl AsRef<std::path::Path>) -> Result<PlayerRecord> {
    let path = path.as_ref();
    let markdown = read_local_document(path)?;
    parse_player_page(&markdown, &format!("file://{}", path.display()))
}
