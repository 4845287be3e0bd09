pub mod config;
pub mod engagement;
pub mod error;
pub mod post;
pub mod render;
pub mod seed;
pub mod session;

pub use config::{AppConfig, ThemeConfig, UiConfig};
pub use engagement::{EngagementState, Relation};
pub use error::ConfigError;
pub use post::{Author, Block, EngagementCounts, PostBody, PostId, PostRecord, VideoDescriptor};
pub use render::{
    render_card, render_feed, AvatarView, ButtonKind, ButtonView, CardView, EngagementBarView,
    FeedView,
};
pub use seed::seed_posts;
pub use session::{Interaction, Session};
