//! Cash-in and expense endpoints. Both lists take an optional `project_id`
//! query so finance pages only pull the current object's records.

use crate::client::{project_id_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{CashIn, CashInPayload, Expense, ExpensePayload};

impl ApiClient {
    pub async fn list_cash_ins(&self, project_id: Option<i64>) -> ApiResult<Vec<CashIn>> {
        self.get("/cashin", &project_id_query(project_id)).await
    }

    pub async fn get_cash_in(&self, id: i64) -> ApiResult<CashIn> {
        self.get(&format!("/cashin/{id}"), &[]).await
    }

    pub async fn create_cash_in(&self, payload: &CashInPayload) -> ApiResult<CashIn> {
        self.post("/cashin", payload).await
    }

    pub async fn update_cash_in(&self, id: i64, payload: &CashInPayload) -> ApiResult<CashIn> {
        self.put(&format!("/cashin/{id}"), payload).await
    }

    pub async fn delete_cash_in(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/cashin/{id}")).await
    }

    pub async fn list_expenses(&self, project_id: Option<i64>) -> ApiResult<Vec<Expense>> {
        self.get("/expenses", &project_id_query(project_id)).await
    }

    pub async fn get_expense(&self, id: i64) -> ApiResult<Expense> {
        self.get(&format!("/expenses/{id}"), &[]).await
    }

    pub async fn create_expense(&self, payload: &ExpensePayload) -> ApiResult<Expense> {
        self.post("/expenses", payload).await
    }

    pub async fn update_expense(&self, id: i64, payload: &ExpensePayload) -> ApiResult<Expense> {
        self.put(&format!("/expenses/{id}"), payload).await
    }

    pub async fn delete_expense(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/expenses/{id}")).await
    }
}
