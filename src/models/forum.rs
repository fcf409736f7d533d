use serde::{Deserialize, Serialize};

/// Predefined discussion category (Competitive, General, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumCategory {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewForumCategory {
    pub name: String,
    pub color: String,
    pub description: String,
}

/// Full topic as created and edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumTopic {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub author_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewForumTopic {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub author_id: String,
}

/// Listing projection the backend denormalizes for the topic index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumTopicSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "authorAvatar")]
    pub author_avatar: String,
    pub date: String,
    pub replies: i64,
    pub likes: i64,
    pub views: i64,
    pub category: String,
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumComment {
    pub id: String,
    pub topic_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentPagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// One page of comments under a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentPage {
    pub comments: Vec<ForumComment>,
    pub pagination: CommentPagination,
}
