//! Typed endpoints of the blog API, scoped to the client's instance.
//!
//! Every endpoint here answers with an envelope.

use serde_json::Value;

use crate::client::DashboardClient;
use crate::error::Result;
use crate::request::RequestInit;
use crate::transport::Transport;
use crate::types::{ListResponse, NewPost, PostFull, PostRef, PostSimple, UpdatePost};

impl<T: Transport> DashboardClient<T> {
    pub fn overview(&self) -> Result<Value> {
        self.fetch_json(&self.instance_url("/overview"), RequestInit::get())
    }

    pub fn analytics(&self) -> Result<Value> {
        self.fetch_json(&self.instance_url("/analytics"), RequestInit::get())
    }

    pub fn list_posts(&self) -> Result<ListResponse<PostSimple>> {
        self.fetch_json(&self.instance_url("/posts"), RequestInit::get())
    }

    pub fn get_post(&self, id: i64) -> Result<PostFull> {
        self.fetch_json(&self.instance_url(&format!("/post/{id}")), RequestInit::get())
    }

    pub fn create_post(&self, post: &NewPost) -> Result<PostRef> {
        self.fetch_json_body(&self.instance_url("/post"), RequestInit::post(), post)
    }

    /// Apply the fields set in `update`. The server answers with the
    /// post's current id and slug.
    pub fn update_post(&self, id: i64, update: &UpdatePost) -> Result<PostRef> {
        self.fetch_json_body(
            &self.instance_url(&format!("/post/{id}")),
            RequestInit::post(),
            update,
        )
    }
}
