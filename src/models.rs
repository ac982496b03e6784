//! Frontend Models
//!
//! Data structures matching backend records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered identity record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owner principal, as text, when the backend includes it
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub bio: String,
}

/// Comment attached to a post (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Author principal, as text
    pub author: String,
    pub content: String,
}

/// Post with its comments (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Author principal, as text
    pub author: String,
    pub content: String,
    /// Nanoseconds since the Unix epoch
    pub timestamp: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn display_time(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Follower / followee entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Principal, as text
    pub id: String,
    pub username: String,
}

/// Both sides of the current user's follow graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowLists {
    pub followers: Vec<UserSummary>,
    pub followees: Vec<UserSummary>,
}

/// Render a backend timestamp (ns) as "YYYY-MM-DD HH:MM UTC"
pub fn format_timestamp(nanos: u64) -> String {
    let secs = (nanos / 1_000_000_000) as i64;
    let subsec = (nanos % 1_000_000_000) as u32;
    match DateTime::<Utc>::from_timestamp(secs, subsec) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => String::from("unknown time"),
    }
}
