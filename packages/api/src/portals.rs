//! Portal endpoints. `GET /portal` is the requesting tenant's own record
//! (feeds the subscription banner); everything under `/super-admin` is the
//! platform operator's console.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Portal, PortalUpdate};

impl ApiClient {
    pub async fn own_portal(&self) -> ApiResult<Portal> {
        self.get("/portal", &[]).await
    }

    pub async fn list_portals(&self) -> ApiResult<Vec<Portal>> {
        self.get("/super-admin/portals", &[]).await
    }

    pub async fn get_portal(&self, id: i64) -> ApiResult<Portal> {
        self.get(&format!("/super-admin/portals/{id}"), &[]).await
    }

    pub async fn update_portal(&self, id: i64, update: &PortalUpdate) -> ApiResult<Portal> {
        self.put(&format!("/super-admin/portals/{id}"), update).await
    }

    pub async fn delete_portal(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/super-admin/portals/{id}")).await
    }

    pub async fn block_portal(&self, id: i64) -> ApiResult<()> {
        self.post_action(&format!("/super-admin/portals/{id}/block"))
            .await
    }

    pub async fn unblock_portal(&self, id: i64) -> ApiResult<()> {
        self.post_action(&format!("/super-admin/portals/{id}/unblock"))
            .await
    }
}
