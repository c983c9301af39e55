/// Deezer API client and the provider trait
pub mod deezer;
/// Data entities for song metadata
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use deezer::DeezerClient;
pub use deezer::MusicApi;
