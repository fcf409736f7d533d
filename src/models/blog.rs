use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
}

/// Create/update payload - everything but the server-assigned id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
}
