//! Like toggle state machine
//!
//! Each (post, client address) pair is either liked or not. A toggle request
//! always flips the pair exactly once.

use serde::Serialize;

/// Like state of one (post, client) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    NotLiked,
    Liked,
}

impl LikeState {
    /// State implied by whether a like row exists.
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Self::Liked
        } else {
            Self::NotLiked
        }
    }

    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }

    /// Flip the state, returning the transition taken.
    pub fn toggle(self) -> LikeTransition {
        let to = match self {
            Self::Liked => Self::NotLiked,
            Self::NotLiked => Self::Liked,
        };
        LikeTransition { from: self, to }
    }
}

/// A single flip of a [`LikeState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeTransition {
    pub from: LikeState,
    pub to: LikeState,
}

impl LikeTransition {
    /// Change this transition applies to the post's like counter.
    pub fn counter_delta(&self) -> i64 {
        match (self.from, self.to) {
            (LikeState::NotLiked, LikeState::Liked) => 1,
            (LikeState::Liked, LikeState::NotLiked) => -1,
            _ => 0,
        }
    }
}
