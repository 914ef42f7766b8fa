//! Project ("object") endpoints.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Project, ProjectPayload};

impl ApiClient {
    /// Objects visible to the requester; the backend already restricts
    /// foremen to their allow-list.
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.get("/projects", &[]).await
    }

    pub async fn get_project(&self, id: i64) -> ApiResult<Project> {
        self.get(&format!("/projects/{id}"), &[]).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> ApiResult<Project> {
        self.post("/projects", payload).await
    }

    pub async fn update_project(&self, id: i64, payload: &ProjectPayload) -> ApiResult<Project> {
        self.put(&format!("/projects/{id}"), payload).await
    }

    pub async fn delete_project(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/projects/{id}")).await
    }
}
