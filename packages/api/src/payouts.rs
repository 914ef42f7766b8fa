//! Crew payout endpoints. Approve and cancel are body-less POST actions,
//! same convention as portal block/unblock.

use crate::client::{project_id_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{Payout, PayoutPayload};

impl ApiClient {
    pub async fn list_payouts(&self, project_id: Option<i64>) -> ApiResult<Vec<Payout>> {
        self.get("/payouts", &project_id_query(project_id)).await
    }

    pub async fn get_payout(&self, id: i64) -> ApiResult<Payout> {
        self.get(&format!("/payouts/{id}"), &[]).await
    }

    pub async fn create_payout(&self, payload: &PayoutPayload) -> ApiResult<Payout> {
        self.post("/payouts", payload).await
    }

    pub async fn update_payout(&self, id: i64, payload: &PayoutPayload) -> ApiResult<Payout> {
        self.put(&format!("/payouts/{id}"), payload).await
    }

    pub async fn delete_payout(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/payouts/{id}")).await
    }

    pub async fn approve_payout(&self, id: i64) -> ApiResult<()> {
        self.post_action(&format!("/payouts/{id}/approve")).await
    }

    pub async fn cancel_payout(&self, id: i64) -> ApiResult<()> {
        self.post_action(&format!("/payouts/{id}/cancel")).await
    }
}
