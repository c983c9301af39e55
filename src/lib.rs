//! Rdeezer - Fetch song metadata and cover art from the Deezer API
//!
//! This library resolves a free-text song name to a normalized metadata
//! record (artists, title, album, cover URL) by searching Deezer and reading
//! the contributors of the first match, and can download cover-art bytes.

/// Client modules for the external metadata provider
pub mod clients;
/// Metadata assembly on top of the provider client
pub mod fetcher;
