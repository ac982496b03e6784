//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Lists are
//! always replaced wholesale with what the backend last returned.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FollowLists, Post, Profile, UserSummary};

#[derive(Clone, Debug, Default, Store)]
pub struct SocialState {
    /// Signed-in user's profile, once the home guard has found it
    pub me: Option<Profile>,
    /// Feed, newest list from getAllPosts
    pub posts: Vec<Post>,
    pub followers: Vec<UserSummary>,
    pub followees: Vec<UserSummary>,
    /// Profile shown on the profile page
    pub viewed_profile: Option<Profile>,
    /// Whether the caller follows the viewed profile (None until known)
    pub following_viewed: Option<bool>,
}

/// Type alias for the store
pub type SocialStore = Store<SocialState>;

/// Get the store from context
pub fn use_social_store() -> SocialStore {
    expect_context::<SocialStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_posts(store: &SocialStore, posts: Option<Vec<Post>>) {
    if let Some(posts) = posts {
        store.posts().set(posts);
    }
}

pub fn store_set_follow_lists(store: &SocialStore, lists: Option<FollowLists>) {
    if let Some(lists) = lists {
        store.followers().set(lists.followers);
        store.followees().set(lists.followees);
    }
}
