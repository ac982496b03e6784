//! UI Components
//!
//! Leptos components for each page and the pieces they share.

mod nav_bar;
mod register_form;
mod login_form;
mod home_page;
mod post_form;
mod post_card;
mod comment_item;
mod followers_page;
mod profile_page;
mod debug_log;

pub use nav_bar::NavBar;
pub use register_form::RegisterForm;
pub use login_form::LoginForm;
pub use home_page::HomePage;
pub use post_form::PostForm;
pub use post_card::PostCard;
pub use comment_item::{CommentForm, CommentItem};
pub use followers_page::FollowersPage;
pub use profile_page::ProfilePage;
pub use debug_log::DebugLog;
