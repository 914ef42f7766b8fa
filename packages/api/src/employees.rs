//! Employee endpoints, admin only.

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Employee, EmployeeUpdate, NewEmployee};

impl ApiClient {
    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.get("/employees", &[]).await
    }

    pub async fn get_employee(&self, id: i64) -> ApiResult<Employee> {
        self.get(&format!("/employees/{id}"), &[]).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> ApiResult<Employee> {
        self.post("/employees", payload).await
    }

    pub async fn update_employee(&self, id: i64, payload: &EmployeeUpdate) -> ApiResult<Employee> {
        self.put(&format!("/employees/{id}"), payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/employees/{id}")).await
    }
}
