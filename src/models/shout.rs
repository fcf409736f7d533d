use serde::{Deserialize, Serialize};

use crate::models::User;

/// A short public post on the shout feed, optionally re-shouting another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shout {
    pub id: String,
    pub user_id: String,
    pub user: User,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub reshout_of_id: Option<String>,
    pub reshout_of: Option<Box<Shout>>,
    pub quote_content: Option<String>,
    pub likes: Vec<ShoutLike>,
    pub comments: Vec<ShoutComment>,
    pub is_flagged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoutLike {
    pub id: String,
    pub user_id: String,
    pub shout_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoutComment {
    pub id: String,
    pub user_id: String,
    pub shout_id: String,
    pub content: String,
    pub created_at: String,
    pub is_flagged: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewShout {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reshout_of_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_content: Option<String>,
}
