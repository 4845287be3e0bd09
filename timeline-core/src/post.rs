use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key of a post, stable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Lets `HashSet<PostId>` be queried with a plain `&str`.
impl Borrow<str> for PostId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub verified: bool,
    /// Asset path of the profile picture, if any.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Author {
    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }

    /// First letter of the display name, used on placeholder avatars.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoDescriptor {
    pub thumbnail: String,
    pub duration: String,
    pub channel_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Paragraph(String),
    OrderedList(Vec<String>),
    /// Inert "Show more" affordance closing a truncated body.
    ShowMore,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PostBody {
    Plain(String),
    Rich(Vec<Block>),
}

impl PostBody {
    /// Flattens the body into display blocks. Plain text is a single paragraph.
    pub fn blocks(&self) -> Vec<Block> {
        match self {
            PostBody::Plain(text) => vec![Block::Paragraph(text.clone())],
            PostBody::Rich(blocks) => blocks.clone(),
        }
    }
}

/// Display labels only; toggling like or repost does not touch them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngagementCounts {
    pub replies: String,
    pub reposts: String,
    pub likes: String,
    pub views: String,
}

impl EngagementCounts {
    pub fn new(
        replies: impl Into<String>,
        reposts: impl Into<String>,
        likes: impl Into<String>,
        views: impl Into<String>,
    ) -> Self {
        Self {
            replies: replies.into(),
            reposts: reposts.into(),
            likes: likes.into(),
            views: views.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRecord {
    pub id: PostId,
    pub author: Author,
    /// Relative age label such as `3h` or `1d`.
    pub timestamp: String,
    pub body: PostBody,
    #[serde(default)]
    pub video: Option<VideoDescriptor>,
    pub counts: EngagementCounts,
}
