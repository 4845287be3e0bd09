//! Feed rendering into a toolkit-independent view tree.
//!
//! The renderer only reads the engagement state. Whatever surface paints
//! the tree reports clicks back as [`Interaction`]s carried by the buttons.

use crate::engagement::EngagementState;
use crate::post::{Block, PostId, PostRecord, VideoDescriptor};
use crate::session::Interaction;

pub const FEED_TITLE: &str = "Home";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub title: &'static str,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView {
    Image(String),
    /// Drawn when the post has no avatar asset or it could not be shown.
    Placeholder { initial: Option<char> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub post_id: PostId,
    pub avatar: AvatarView,
    pub name: String,
    pub handle: String,
    pub verified: bool,
    pub timestamp: String,
    pub body: Vec<Block>,
    pub video: Option<VideoDescriptor>,
    pub engagement: EngagementBarView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Reply,
    Repost,
    Like,
    Views,
    Bookmark,
    Share,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub kind: ButtonKind,
    pub count: Option<String>,
    pub active: bool,
    /// `None` for inert placeholders.
    pub action: Option<Interaction>,
}

impl ButtonView {
    fn inert(kind: ButtonKind, count: Option<&str>) -> Self {
        Self {
            kind,
            count: count.map(str::to_owned),
            active: false,
            action: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementBarView {
    pub liked: bool,
    pub reposted: bool,
    pub buttons: Vec<ButtonView>,
}

impl EngagementBarView {
    pub fn button(&self, kind: ButtonKind) -> Option<&ButtonView> {
        self.buttons.iter().find(|b| b.kind == kind)
    }
}

/// One card per post, in the given order.
pub fn render_feed(posts: &[PostRecord], state: &EngagementState) -> FeedView {
    FeedView {
        title: FEED_TITLE,
        cards: posts.iter().map(|post| render_card(post, state)).collect(),
    }
}

pub fn render_card(post: &PostRecord, state: &EngagementState) -> CardView {
    let liked = state.is_liked(post.id.as_str());
    let reposted = state.is_reposted(post.id.as_str());

    let avatar = match &post.author.avatar {
        Some(asset) if !asset.trim().is_empty() => AvatarView::Image(asset.clone()),
        _ => AvatarView::Placeholder {
            initial: post.author.initial(),
        },
    };

    CardView {
        post_id: post.id.clone(),
        avatar,
        name: post.author.name.clone(),
        handle: post.author.display_handle(),
        verified: post.author.verified,
        timestamp: post.timestamp.clone(),
        body: post.body.blocks(),
        video: post.video.clone(),
        engagement: render_engagement_bar(post, liked, reposted),
    }
}

fn render_engagement_bar(post: &PostRecord, liked: bool, reposted: bool) -> EngagementBarView {
    let counts = &post.counts;
    let buttons = vec![
        ButtonView::inert(ButtonKind::Reply, Some(counts.replies.as_str())),
        ButtonView {
            kind: ButtonKind::Repost,
            count: Some(counts.reposts.clone()),
            active: reposted,
            action: Some(Interaction::ToggleRepost(post.id.clone())),
        },
        ButtonView {
            kind: ButtonKind::Like,
            count: Some(counts.likes.clone()),
            active: liked,
            action: Some(Interaction::ToggleLike(post.id.clone())),
        },
        ButtonView::inert(ButtonKind::Views, Some(counts.views.as_str())),
        ButtonView::inert(ButtonKind::Bookmark, None),
        ButtonView::inert(ButtonKind::Share, None),
    ];
    EngagementBarView {
        liked,
        reposted,
        buttons,
    }
}
