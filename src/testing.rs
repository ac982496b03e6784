//! Test Doubles
//!
//! In-memory backend that records every call, and a shell that records
//! alerts, prompts and redirects instead of touching the window.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use crate::backend::SocialBackend;
use crate::error::{ClientError, ClientResult};
use crate::models::{Comment, Post, Profile, UserSummary};
use crate::shell::Shell;

const ME: &str = "me-principal";

#[derive(Default)]
pub struct MockBackend {
    calls: RefCell<Vec<String>>,
    failing: RefCell<HashSet<&'static str>>,
    refuse_profiles: Cell<bool>,
    my_profile: RefCell<Option<Profile>>,
    posts: RefCell<Vec<Post>>,
    next_id: Cell<u64>,
    followers: RefCell<Vec<UserSummary>>,
    followees: RefCell<Vec<UserSummary>>,
}

impl MockBackend {
    pub fn with_profile(username: &str, bio: &str) -> Self {
        let backend = Self::default();
        *backend.my_profile.borrow_mut() = Some(Profile {
            id: Some(ME.to_string()),
            username: username.to_string(),
            bio: bio.to_string(),
        });
        backend
    }

    /// Make `method` reject from now on
    pub fn fail(&self, method: &'static str) {
        self.failing.borrow_mut().insert(method);
    }

    /// `createProfile` answers false
    pub fn refuse_profiles(&self) {
        self.refuse_profiles.set(true);
    }

    pub fn add_follower(&self, id: &str, username: &str) {
        self.followers.borrow_mut().push(UserSummary { id: id.to_string(), username: username.to_string() });
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str, call: String) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(method) {
            return Err(ClientError::call(method, "canister rejected the call"));
        }
        Ok(())
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn with_post<T>(&self, post_id: u64, f: impl FnOnce(&mut Post) -> T) -> ClientResult<T> {
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ClientError::call("post", format!("no post {}", post_id)))?;
        Ok(f(post))
    }
}

#[async_trait(?Send)]
impl SocialBackend for MockBackend {
    async fn create_profile(&self, username: &str, bio: &str) -> ClientResult<bool> {
        self.record("createProfile", format!("createProfile({}, {})", username, bio))?;
        if self.refuse_profiles.get() {
            return Ok(false);
        }
        *self.my_profile.borrow_mut() = Some(Profile {
            id: Some(ME.to_string()),
            username: username.to_string(),
            bio: bio.to_string(),
        });
        Ok(true)
    }

    async fn get_my_profile(&self) -> ClientResult<Option<Profile>> {
        self.record("getMyProfile", "getMyProfile".to_string())?;
        Ok(self.my_profile.borrow().clone())
    }

    async fn get_profile(&self, user: &str) -> ClientResult<Option<Profile>> {
        self.record("getProfile", format!("getProfile({})", user))?;
        Ok(None)
    }

    async fn create_post(&self, content: &str) -> ClientResult<()> {
        self.record("createPost", format!("createPost({})", content))?;
        let id = self.next_id();
        self.posts.borrow_mut().push(Post {
            id,
            author: ME.to_string(),
            content: content.to_string(),
            timestamp: id * 1_000_000_000,
            comments: Vec::new(),
        });
        Ok(())
    }

    async fn get_all_posts(&self) -> ClientResult<Vec<Post>> {
        self.record("getAllPosts", "getAllPosts".to_string())?;
        Ok(self.posts.borrow().clone())
    }

    async fn edit_post(&self, post_id: u64, content: &str) -> ClientResult<()> {
        self.record("editPost", format!("editPost({}, {})", post_id, content))?;
        self.with_post(post_id, |p| p.content = content.to_string())
    }

    async fn delete_post(&self, post_id: u64) -> ClientResult<()> {
        self.record("deletePost", format!("deletePost({})", post_id))?;
        self.posts.borrow_mut().retain(|p| p.id != post_id);
        Ok(())
    }

    async fn add_comment(&self, post_id: u64, content: &str) -> ClientResult<()> {
        self.record("addComment", format!("addComment({}, {})", post_id, content))?;
        let id = self.next_id();
        self.with_post(post_id, |p| {
            p.comments.push(Comment { id, author: ME.to_string(), content: content.to_string() })
        })
    }

    async fn edit_comment(&self, post_id: u64, comment_id: u64, content: &str) -> ClientResult<()> {
        self.record("editComment", format!("editComment({}, {}, {})", post_id, comment_id, content))?;
        self.with_post(post_id, |p| {
            if let Some(c) = p.comments.iter_mut().find(|c| c.id == comment_id) {
                c.content = content.to_string();
            }
        })
    }

    async fn delete_comment(&self, post_id: u64, comment_id: u64) -> ClientResult<()> {
        self.record("deleteComment", format!("deleteComment({}, {})", post_id, comment_id))?;
        self.with_post(post_id, |p| p.comments.retain(|c| c.id != comment_id))
    }

    async fn follow_user(&self, target: &str) -> ClientResult<()> {
        self.record("followUser", format!("followUser({})", target))?;
        let mut followees = self.followees.borrow_mut();
        if !followees.iter().any(|u| u.id == target) {
            followees.push(UserSummary { id: target.to_string(), username: target.to_string() });
        }
        Ok(())
    }

    async fn unfollow_user(&self, target: &str) -> ClientResult<()> {
        self.record("unfollowUser", format!("unfollowUser({})", target))?;
        self.followees.borrow_mut().retain(|u| u.id != target);
        Ok(())
    }

    async fn is_following(&self, target: &str) -> ClientResult<bool> {
        self.record("isFollowing", format!("isFollowing({})", target))?;
        Ok(self.followees.borrow().iter().any(|u| u.id == target))
    }

    async fn accept_follow_request(&self, follower: &str) -> ClientResult<()> {
        self.record("acceptFollowRequest", format!("acceptFollowRequest({})", follower))
    }

    async fn get_followers(&self) -> ClientResult<Vec<UserSummary>> {
        self.record("getFollowers", "getFollowers".to_string())?;
        Ok(self.followers.borrow().clone())
    }

    async fn get_followees(&self) -> ClientResult<Vec<UserSummary>> {
        self.record("getFollowees", "getFollowees".to_string())?;
        Ok(self.followees.borrow().clone())
    }
}

#[derive(Default)]
pub struct RecordingShell {
    answer: Option<String>,
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
}

impl RecordingShell {
    /// Shell whose prompts all return `answer`
    pub fn answering(answer: &str) -> Self {
        Self { answer: Some(answer.to_string()), ..Default::default() }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Shell for RecordingShell {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.clone()
    }

    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }
}
