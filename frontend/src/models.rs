use serde::Deserialize;

/// Row of the saved-pages listing
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub block_count: usize,
    pub updated_at: String,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub error: String,
}
