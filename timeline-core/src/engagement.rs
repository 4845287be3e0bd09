use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::post::PostId;

/// A boolean relation between the session user and a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Like,
    Repost,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Like => f.write_str("like"),
            Relation::Repost => f.write_str("repost"),
        }
    }
}

/// Session-local liked/reposted membership.
///
/// Every post starts `off` for both relations. Queries never mutate; only
/// the toggle operations do. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct EngagementState {
    liked: HashSet<PostId>,
    reposted: HashSet<PostId>,
}

impl EngagementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn is_reposted(&self, id: &str) -> bool {
        self.reposted.contains(id)
    }

    pub fn contains(&self, relation: Relation, id: &str) -> bool {
        self.set(relation).contains(id)
    }

    /// Flips membership of `id` for `relation` and returns the new state.
    /// An id never seen before is simply inserted.
    pub fn toggle(&mut self, relation: Relation, id: &PostId) -> bool {
        let set = self.set_mut(relation);
        let now_on = if set.remove(id.as_str()) {
            false
        } else {
            set.insert(id.clone());
            true
        };
        debug!(post = %id, %relation, on = now_on, "engagement toggled");
        now_on
    }

    pub fn toggle_like(&mut self, id: &PostId) -> bool {
        self.toggle(Relation::Like, id)
    }

    pub fn toggle_repost(&mut self, id: &PostId) -> bool {
        self.toggle(Relation::Repost, id)
    }

    #[cfg(test)]
    pub(crate) fn liked_count(&self) -> usize {
        self.liked.len()
    }

    #[cfg(test)]
    pub(crate) fn reposted_count(&self) -> usize {
        self.reposted.len()
    }

    fn set(&self, relation: Relation) -> &HashSet<PostId> {
        match relation {
            Relation::Like => &self.liked,
            Relation::Repost => &self.reposted,
        }
    }

    fn set_mut(&mut self, relation: Relation) -> &mut HashSet<PostId> {
        match relation {
            Relation::Like => &mut self.liked,
            Relation::Repost => &mut self.reposted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PostId {
        PostId::from(s)
    }

    #[test]
    fn starts_off_for_every_post() {
        let state = EngagementState::new();
        for p in ["1", "2", "3", "", "unknown"] {
            assert!(!state.is_liked(p));
            assert!(!state.is_reposted(p));
        }
    }

    #[test]
    fn toggle_like_marks_only_that_post() {
        let mut state = EngagementState::new();
        assert!(state.toggle_like(&id("1")));
        assert!(state.is_liked("1"));
        assert!(!state.is_liked("2"));
    }

    #[test]
    fn double_toggle_restores_prior_state() {
        let mut state = EngagementState::new();
        assert!(state.toggle_repost(&id("1")));
        assert!(!state.toggle_repost(&id("1")));
        assert!(!state.is_reposted("1"));

        state.toggle_like(&id("7"));
        let before = state.is_liked("7");
        state.toggle_like(&id("7"));
        state.toggle_like(&id("7"));
        assert_eq!(state.is_liked("7"), before);
    }

    #[test]
    fn relations_are_independent() {
        let mut state = EngagementState::new();
        state.toggle_like(&id("1"));
        assert!(!state.is_reposted("1"));

        state.toggle_repost(&id("2"));
        assert!(!state.is_liked("2"));

        state.toggle_repost(&id("1"));
        assert!(state.is_liked("1"));
        assert!(state.is_reposted("1"));
        state.toggle_like(&id("1"));
        assert!(state.is_reposted("1"));
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut state = EngagementState::new();
        state.toggle_like(&id("1"));
        for _ in 0..3 {
            assert!(state.is_liked("1"));
            assert!(!state.is_reposted("1"));
            assert!(state.contains(Relation::Like, "1"));
        }
        assert_eq!(state.liked_count(), 1);
        assert_eq!(state.reposted_count(), 0);
    }
}
