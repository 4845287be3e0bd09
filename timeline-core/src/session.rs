use tracing::info;

use crate::engagement::{EngagementState, Relation};
use crate::post::{PostId, PostRecord};
use crate::render::{render_feed, FeedView};
use crate::seed::seed_posts;

/// A user interaction reported by the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interaction {
    ToggleLike(PostId),
    ToggleRepost(PostId),
}

impl Interaction {
    pub fn post_id(&self) -> &PostId {
        match self {
            Interaction::ToggleLike(id) | Interaction::ToggleRepost(id) => id,
        }
    }

    pub fn relation(&self) -> Relation {
        match self {
            Interaction::ToggleLike(_) => Relation::Like,
            Interaction::ToggleRepost(_) => Relation::Repost,
        }
    }
}

/// Everything one feed session owns: the posts and their engagement state.
#[derive(Debug, Clone)]
pub struct Session {
    posts: Vec<PostRecord>,
    engagement: EngagementState,
}

impl Session {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        info!(posts = posts.len(), "feed session started");
        Self {
            posts,
            engagement: EngagementState::new(),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(seed_posts())
    }

    pub fn engagement(&self) -> &EngagementState {
        &self.engagement
    }

    pub fn render(&self) -> FeedView {
        render_feed(&self.posts, &self.engagement)
    }

    /// Applies one interaction and returns the new membership state.
    pub fn dispatch(&mut self, interaction: &Interaction) -> bool {
        self.engagement
            .toggle(interaction.relation(), interaction.post_id())
    }

    /// Applies interactions in the order they were produced.
    pub fn dispatch_all<I>(&mut self, interactions: I) -> usize
    where
        I: IntoIterator<Item = Interaction>,
    {
        let mut applied = 0;
        for interaction in interactions {
            self.dispatch(&interaction);
            applied += 1;
        }
        applied
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed()
    }
}
