//! Event Handlers
//!
//! One function per user action: perform the backend call, tell the user
//! how it went, and hand back whatever the page should re-render. Failures
//! are logged and alerted, never retried. A `None` return means there is
//! nothing new to render.

use crate::backend::SocialBackend;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{FollowLists, Post, Profile};
use crate::routes::Page;
use crate::shell::Shell;

fn report<S: Shell + ?Sized>(shell: &S, action: &str, err: &ClientError) {
    log::error!("Error {}: {}", action, err);
    shell.alert(&format!("Error {}: {}", action, err));
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Prompt for replacement text, returned as typed; blank or cancelled yields `None`
fn prompt_text<S: Shell + ?Sized>(shell: &S, message: &str) -> Option<String> {
    shell.prompt(message).filter(|s| !is_blank(s))
}

// ========================
// Account
// ========================

/// Submit the registration form. Returns true when the user was sent on to login.
pub async fn register<B, S>(backend: &B, shell: &S, config: &ClientConfig, username: &str, bio: &str) -> bool
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if is_blank(username) {
        shell.alert("Please choose a username.");
        return false;
    }
    match backend.create_profile(username, bio).await {
        Ok(true) => {
            log::info!("Profile created for {}", username);
            shell.alert("Registration successful! Redirecting to login...");
            shell.redirect(&config.page_url(Page::Login));
            true
        }
        Ok(false) => {
            log::warn!("Backend refused profile for {}", username);
            shell.alert("Registration failed. Please try again.");
            false
        }
        Err(e) => {
            report(shell, "during registration", &e);
            false
        }
    }
}

/// Hand the user to Internet Identity, which returns them to the home page
pub fn login<S: Shell + ?Sized>(shell: &S, config: &ClientConfig) {
    shell.redirect(&config.login_url());
}

pub fn logout<S: Shell + ?Sized>(shell: &S, config: &ClientConfig) {
    shell.alert("Logged out successfully!");
    shell.redirect(&config.page_url(Page::Login));
}

/// Home page guard: the caller's profile, or a redirect to registration
pub async fn check_home<B, S>(backend: &B, shell: &S, config: &ClientConfig) -> Option<Profile>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    match backend.get_my_profile().await {
        Ok(Some(profile)) => {
            log::info!("Profile found: {}", profile.username);
            Some(profile)
        }
        Ok(None) => {
            shell.alert("No profile found. Please register.");
            shell.redirect(&config.page_url(Page::Register));
            None
        }
        Err(e) => {
            report(shell, "checking profile", &e);
            None
        }
    }
}

pub async fn load_profile<B, S>(backend: &B, shell: &S, user: &str) -> Option<Profile>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    match backend.get_profile(user).await {
        Ok(profile) => {
            if profile.is_none() {
                log::info!("No profile for {}", user);
            }
            profile
        }
        Err(e) => {
            report(shell, "loading user profile", &e);
            None
        }
    }
}

// ========================
// Posts
// ========================

pub async fn load_posts<B, S>(backend: &B, shell: &S) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    match backend.get_all_posts().await {
        Ok(posts) => {
            log::debug!("Loaded {} posts", posts.len());
            Some(posts)
        }
        Err(e) => {
            report(shell, "loading posts", &e);
            None
        }
    }
}

pub async fn create_post<B, S>(backend: &B, shell: &S, content: &str) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if is_blank(content) {
        return None;
    }
    if let Err(e) = backend.create_post(content).await {
        report(shell, "creating post", &e);
        return None;
    }
    shell.alert("Post created successfully!");
    load_posts(backend, shell).await
}

pub async fn edit_post<B, S>(backend: &B, shell: &S, post_id: u64) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    let content = prompt_text(shell, "Enter the new content for the post:")?;
    if let Err(e) = backend.edit_post(post_id, &content).await {
        report(shell, "editing post", &e);
        return None;
    }
    shell.alert("Post edited successfully!");
    load_posts(backend, shell).await
}

pub async fn delete_post<B, S>(backend: &B, shell: &S, post_id: u64) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if let Err(e) = backend.delete_post(post_id).await {
        report(shell, "deleting post", &e);
        return None;
    }
    shell.alert("Post deleted successfully!");
    load_posts(backend, shell).await
}

// ========================
// Comments
// ========================

pub async fn add_comment<B, S>(backend: &B, shell: &S, post_id: u64, content: &str) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if is_blank(content) {
        return None;
    }
    if let Err(e) = backend.add_comment(post_id, content).await {
        report(shell, "adding comment", &e);
        return None;
    }
    shell.alert("Comment added successfully!");
    load_posts(backend, shell).await
}

pub async fn edit_comment<B, S>(backend: &B, shell: &S, post_id: u64, comment_id: u64) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    let content = prompt_text(shell, "Enter the new content for the comment:")?;
    if let Err(e) = backend.edit_comment(post_id, comment_id, &content).await {
        report(shell, "editing comment", &e);
        return None;
    }
    shell.alert("Comment edited successfully!");
    load_posts(backend, shell).await
}

pub async fn delete_comment<B, S>(backend: &B, shell: &S, post_id: u64, comment_id: u64) -> Option<Vec<Post>>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if let Err(e) = backend.delete_comment(post_id, comment_id).await {
        report(shell, "deleting comment", &e);
        return None;
    }
    shell.alert("Comment deleted successfully!");
    load_posts(backend, shell).await
}

// ========================
// Follow graph
// ========================

pub async fn load_follow_lists<B, S>(backend: &B, shell: &S) -> Option<FollowLists>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    let lists = async {
        Ok::<_, ClientError>(FollowLists {
            followers: backend.get_followers().await?,
            followees: backend.get_followees().await?,
        })
    };
    match lists.await {
        Ok(lists) => Some(lists),
        Err(e) => {
            report(shell, "loading followers and followees", &e);
            None
        }
    }
}

/// Follow `target` if not yet following, otherwise unfollow.
/// Returns the new state and the reloaded lists.
pub async fn toggle_follow<B, S>(backend: &B, shell: &S, target: &str) -> Option<(bool, Option<FollowLists>)>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    let toggled = async {
        if backend.is_following(target).await? {
            backend.unfollow_user(target).await?;
            Ok::<_, ClientError>(false)
        } else {
            backend.follow_user(target).await?;
            Ok(true)
        }
    };
    let now_following = match toggled.await {
        Ok(state) => state,
        Err(e) => {
            report(shell, "toggling follow status", &e);
            return None;
        }
    };
    if now_following {
        shell.alert("You are now following this user.");
    } else {
        shell.alert("You have unfollowed this user.");
    }
    Some((now_following, load_follow_lists(backend, shell).await))
}

pub async fn accept_follow_request<B, S>(backend: &B, shell: &S, follower: &str) -> Option<FollowLists>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    if let Err(e) = backend.accept_follow_request(follower).await {
        report(shell, "accepting follow request", &e);
        return None;
    }
    shell.alert("You have accepted the follow request.");
    load_follow_lists(backend, shell).await
}

/// Current follow state toward `target`, for labelling the profile button
pub async fn follow_state<B, S>(backend: &B, shell: &S, target: &str) -> Option<bool>
where
    B: SocialBackend + ?Sized,
    S: Shell + ?Sized,
{
    match backend.is_following(target).await {
        Ok(state) => Some(state),
        Err(e) => {
            report(shell, "checking follow status", &e);
            None
        }
    }
}
