//! # Money movement on an object: cash-in payments and expenses
//!
//! Both record types are dated amounts tied to one project. The backend
//! assigns id, creator, and timestamps; the client only ever sends the
//! editable fields via the payload structs. `creator` is a denormalised
//! back-reference kept for display in the tables.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dates;

/// Who created a record, as embedded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: i64,
    pub name: String,
}

/// Client money received against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashIn {
    pub id: i64,
    pub project_id: i64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashInPayload {
    pub project_id: i64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub amount: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    #[default]
    Materials,
    Labor,
    Equipment,
    Transport,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Materials,
        ExpenseCategory::Labor,
        ExpenseCategory::Equipment,
        ExpenseCategory::Transport,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Materials => "Materials",
            ExpenseCategory::Labor => "Labor",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Materials => "materials",
            ExpenseCategory::Labor => "labor",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Money spent on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub project_id: i64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub project_id: i64,
    #[serde(with = "dates::compat")]
    pub date: NaiveDate,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub comment: Option<String>,
}
