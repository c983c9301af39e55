use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongMetadata {
    pub artist: Vec<String>, // contributor names, source order
    pub title: String,
    pub album: String,
    pub cover: String,
}
