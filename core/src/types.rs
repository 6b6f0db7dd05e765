//! Domain DTOs for the blog API.
//!
//! # Design
//! These types mirror the server's JSON but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Post
//! `content` is a rich-text document the dashboard edits but never
//! interprets, so it stays a `serde_json::Value`.

use serde::{Deserialize, Serialize};

/// One page of a listing.
///
/// Servers are expected to keep `items.len() <= limit` and
/// `offset + items.len() <= total`; neither is checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            limit: 0,
            total: 0,
        }
    }

    /// A single page holding every item.
    pub fn all(items: Vec<T>) -> Self {
        Self {
            offset: 0,
            limit: items.len(),
            total: items.len(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether items exist past the end of this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }
}

/// Publication state of a post. The server stores it as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft = 0,
    Published = 1,
}

impl PostStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PostStatus::Draft),
            1 => Some(PostStatus::Published),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// A post as it appears in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSimple {
    pub id: i64,
    pub blog_id: i64,
    pub title: Option<String>,
}

/// A post with its content, as returned by the single-post endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFull {
    pub id: i64,
    #[serde(default)]
    pub blog_id: i64,
    pub title: String,
    pub content: serde_json::Value,
    pub slug: Option<String>,
    /// Raw status code; see `PostFull::status`.
    #[serde(rename = "status")]
    pub status_code: i32,
}

impl PostFull {
    pub fn status(&self) -> Option<PostStatus> {
        PostStatus::from_code(self.status_code)
    }
}

/// Identifier pair returned after creating or updating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: i64,
    pub slug: Option<String>,
}

/// Request payload for creating a post. New posts start as drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: serde_json::Value,
}

/// Request payload for updating a post. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_all_covers_every_item() {
        let list = ListResponse::all(vec![1, 2, 3]);
        assert_eq!((list.offset, list.limit, list.total), (0, 3, 3));
        assert!(!list.has_more());
    }

    #[test]
    fn list_has_more_when_page_ends_early() {
        let list = ListResponse {
            items: vec!["a", "b"],
            offset: 10,
            limit: 2,
            total: 30,
        };
        assert_eq!(list.len(), 2);
        assert!(list.has_more());
        assert!(ListResponse::<u8>::empty().is_empty());
    }

    #[test]
    fn post_simple_ignores_extra_fields() {
        let post: PostSimple = serde_json::from_value(json!({
            "id": 7,
            "blog_id": 1,
            "title": null,
            "slug": "ignored",
            "status": 1
        }))
        .unwrap();
        assert_eq!(post.id, 7);
        assert!(post.title.is_none());
    }

    #[test]
    fn post_full_exposes_status() {
        let post: PostFull = serde_json::from_value(json!({
            "id": 3,
            "title": "Hello",
            "content": {"ops": [{"insert": "Hi\n"}]},
            "slug": null,
            "status": 1
        }))
        .unwrap();
        assert_eq!(post.status(), Some(PostStatus::Published));
        assert_eq!(post.content["ops"][0]["insert"], "Hi\n");
    }

    #[test]
    fn update_post_omits_absent_fields() {
        let body = serde_json::to_value(UpdatePost {
            status: Some(PostStatus::Published),
            ..UpdatePost::default()
        })
        .unwrap();
        assert_eq!(body, json!({"status": "Published"}));
    }

    #[test]
    fn status_codes() {
        assert_eq!(PostStatus::Draft.code(), 0);
        assert_eq!(PostStatus::from_code(1), Some(PostStatus::Published));
        assert_eq!(PostStatus::from_code(9), None);
    }
}
