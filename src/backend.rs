//! Backend Call Surface
//!
//! The social-network actor's declared calls. The canister implementation
//! lives in `commands`; tests use an in-memory double.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Post, Profile, UserSummary};

/// Calls exposed by the backend actor.
///
/// Identity is the caller's; principals are passed as text. Mutations are
/// atomic on the backend and this client never mirrors their effects locally.
#[async_trait(?Send)]
pub trait SocialBackend {
    // Profiles
    async fn create_profile(&self, username: &str, bio: &str) -> ClientResult<bool>;
    async fn get_my_profile(&self) -> ClientResult<Option<Profile>>;
    async fn get_profile(&self, user: &str) -> ClientResult<Option<Profile>>;

    // Posts
    async fn create_post(&self, content: &str) -> ClientResult<()>;
    async fn get_all_posts(&self) -> ClientResult<Vec<Post>>;
    async fn edit_post(&self, post_id: u64, content: &str) -> ClientResult<()>;
    async fn delete_post(&self, post_id: u64) -> ClientResult<()>;

    // Comments
    async fn add_comment(&self, post_id: u64, content: &str) -> ClientResult<()>;
    async fn edit_comment(&self, post_id: u64, comment_id: u64, content: &str) -> ClientResult<()>;
    async fn delete_comment(&self, post_id: u64, comment_id: u64) -> ClientResult<()>;

    // Follow graph
    async fn follow_user(&self, target: &str) -> ClientResult<()>;
    async fn unfollow_user(&self, target: &str) -> ClientResult<()>;
    async fn is_following(&self, target: &str) -> ClientResult<bool>;
    async fn accept_follow_request(&self, follower: &str) -> ClientResult<()>;
    async fn get_followers(&self) -> ClientResult<Vec<UserSummary>>;
    async fn get_followees(&self) -> ClientResult<Vec<UserSummary>>;
}
