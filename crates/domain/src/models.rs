use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FALLBACK_POSTER_URL: &str = "/src/assets/Images/default-title-image.png";

pub const DEFAULT_PROFILE_IMAGE: &str = "/src/assets/Images/default-profile.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub preferred_genres: Vec<String>,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub signed_url: String,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub is_admin: bool,
}

impl Account {
    pub fn display_image(&self) -> &str {
        if self.signed_url.is_empty() {
            DEFAULT_PROFILE_IMAGE
        } else {
            &self.signed_url
        }
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Watchlist {
    pub list_id: String,
    pub list_name: String,
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    // 仅在 enrichment 之后存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl Watchlist {
    pub fn cover_title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    pub fn poster(&self) -> &str {
        self.poster_url.as_deref().unwrap_or(FALLBACK_POSTER_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: String,
    pub comment: String,
    // 原样保留，后端偶尔返回不带时区的时间
    #[serde(default)]
    pub date_posted: String,
    pub user_id: String,
    pub username: String,
    pub watchlist_id: String,
    pub watchlist_name: String,
}

impl Comment {
    // 不带时区的时间按 UTC 处理
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date_posted.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetadata {
    #[serde(default)]
    pub poster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub watchlists: Vec<Watchlist>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub user_id: String,
}

impl AdminSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
