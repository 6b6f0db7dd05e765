use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const BLOG_ID: i64 = 1;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", content = "value")]
pub enum WrappingResponse<V> {
    Resp(V),
    Error(ApiErrorResponse),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiErrorResponse {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn all(items: Vec<T>) -> Self {
        Self {
            offset: 0,
            limit: items.len(),
            total: items.len(),
            items,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostStatus {
    Draft = 0,
    Published = 1,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: Value,
    pub slug: Option<String>,
    pub status: i32,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: Value,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<Value>,
    pub status: Option<PostStatus>,
    pub slug: Option<String>,
}

/// Posts of the single blog this server hosts.
#[derive(Debug)]
pub struct BlogStore {
    pub instance: Uuid,
    posts: BTreeMap<i64, Post>,
    next_id: i64,
}

impl BlogStore {
    pub fn new(instance: Uuid) -> Self {
        Self {
            instance,
            posts: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<BlogStore>>;

/// Error envelope sent for every failure. Lookup failures use status 500,
/// as the real API does; rejected input keeps axum's status.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    description: String,
}

impl ApiFailure {
    fn internal(description: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: description.to_string(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(WrappingResponse::<()>::Error(ApiErrorResponse {
                description: self.description,
            })),
        )
            .into_response()
    }
}

impl From<PathRejection> for ApiFailure {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: rejection.status(),
            description: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            description: rejection.body_text(),
        }
    }
}

const ADDON_NOT_FOUND: &str = "Addon not found";
const POST_NOT_FOUND: &str = "Post not found";

type ApiResult<T> = Result<Json<WrappingResponse<T>>, ApiFailure>;

fn okay<T>(value: T) -> ApiResult<T> {
    Ok(Json(WrappingResponse::Resp(value)))
}

fn check_instance(store: &BlogStore, instance: Uuid) -> Result<(), ApiFailure> {
    if store.instance == instance {
        Ok(())
    } else {
        Err(ApiFailure::internal(ADDON_NOT_FOUND))
    }
}

pub fn app(instance: Uuid) -> Router {
    let db: Db = Arc::new(RwLock::new(BlogStore::new(instance)));
    Router::new()
        .route("/blog/{instance}/overview", get(get_overview))
        .route("/blog/{instance}/analytics", get(get_analytics))
        .route("/blog/{instance}/posts", get(list_posts))
        .route("/blog/{instance}/post", post(create_post))
        .route("/blog/{instance}/post/{post_id}", get(get_post).post(update_post))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener, instance: Uuid) -> Result<(), std::io::Error> {
    axum::serve(listener, app(instance)).await
}

async fn get_overview(
    State(db): State<Db>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Value> {
    let Path(instance) = path?;
    let store = db.read().await;
    check_instance(&store, instance)?;
    okay(json!({ "posts": store.posts.len() }))
}

async fn get_analytics(
    State(db): State<Db>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Value> {
    let Path(instance) = path?;
    let store = db.read().await;
    check_instance(&store, instance)?;
    okay(json!({}))
}

async fn list_posts(
    State(db): State<Db>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<ListResponse<Post>> {
    let Path(instance) = path?;
    let store = db.read().await;
    check_instance(&store, instance)?;
    okay(ListResponse::all(store.posts.values().cloned().collect()))
}

async fn create_post(
    State(db): State<Db>,
    path: Result<Path<Uuid>, PathRejection>,
    input: Result<Json<CreatePost>, JsonRejection>,
) -> ApiResult<Value> {
    let Path(instance) = path?;
    let Json(input) = input?;
    let mut store = db.write().await;
    check_instance(&store, instance)?;
    let id = store.next_id;
    store.next_id += 1;
    let post = Post {
        id,
        blog_id: BLOG_ID,
        title: input.title,
        content: input.content,
        slug: None,
        status: PostStatus::Draft as i32,
    };
    tracing::info!(post_id = id, "created post");
    store.posts.insert(id, post);
    okay(json!({ "id": id, "slug": null }))
}

async fn get_post(
    State(db): State<Db>,
    path: Result<Path<(Uuid, i64)>, PathRejection>,
) -> ApiResult<Post> {
    let Path((instance, post_id)) = path?;
    let store = db.read().await;
    check_instance(&store, instance)?;
    let post = store
        .posts
        .get(&post_id)
        .cloned()
        .ok_or_else(|| ApiFailure::internal(POST_NOT_FOUND))?;
    okay(post)
}

async fn update_post(
    State(db): State<Db>,
    path: Result<Path<(Uuid, i64)>, PathRejection>,
    input: Result<Json<UpdatePost>, JsonRejection>,
) -> ApiResult<Value> {
    let Path((instance, post_id)) = path?;
    let Json(input) = input?;
    let mut store = db.write().await;
    check_instance(&store, instance)?;
    let post = store
        .posts
        .get_mut(&post_id)
        .ok_or_else(|| ApiFailure::internal(POST_NOT_FOUND))?;
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(status) = input.status {
        post.status = status as i32;
    }
    if let Some(slug) = input.slug {
        post.slug = Some(slug);
    }
    okay(json!({ "id": post.id, "slug": post.slug }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_type_and_value() {
        let json = serde_json::to_value(WrappingResponse::Resp(3)).unwrap();
        assert_eq!(json, json!({"type": "Resp", "value": 3}));
    }

    #[test]
    fn failure_is_error_envelope() {
        let json = serde_json::to_value(WrappingResponse::<()>::Error(ApiErrorResponse {
            description: "Post not found".to_string(),
        }))
        .unwrap();
        assert_eq!(
            json,
            json!({"type": "Error", "value": {"description": "Post not found"}})
        );
    }

    #[test]
    fn list_all_covers_items() {
        let list = ListResponse::all(vec![1, 2]);
        assert_eq!((list.offset, list.limit, list.total), (0, 2, 2));
    }

    #[test]
    fn update_post_all_fields_optional() {
        let input: UpdatePost = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.content.is_none());
        assert!(input.status.is_none());
        assert!(input.slug.is_none());
    }

    #[test]
    fn update_post_reads_status_by_name() {
        let input: UpdatePost = serde_json::from_str(r#"{"status":"Published"}"#).unwrap();
        assert_eq!(input.status, Some(PostStatus::Published));
    }

    #[test]
    fn create_post_rejects_missing_title() {
        let result: Result<CreatePost, _> = serde_json::from_str(r#"{"content":{}}"#);
        assert!(result.is_err());
    }
}
