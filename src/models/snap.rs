use serde::{Deserialize, Serialize};

/// A photo post in the snapdex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snap {
    pub id: String,
    pub user_id: String,
    pub media_url: String,
    pub caption: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSnap {
    pub media_url: String,
    pub caption: String,
    pub tags: Vec<String>,
}

/// Partial update - only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
