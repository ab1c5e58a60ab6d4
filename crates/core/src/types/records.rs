//! Backend record schemas.
//!
//! Typed schemas for the three datasets the backend API serves. Responses
//! are validated against these at the API boundary; a body that does not
//! match is a dataset failure, never passed through untyped.
//!
//! The `withTrashed` endpoints include soft-deleted rows, so `deleted_at`
//! is present and nullable on shops and users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shop registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub is_verified: bool,
    pub image_url: String,
    pub is_open: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` for logically removed rows.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: String,
    pub is_verified: bool,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` for logically removed rows.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A queue entry, fetched in bulk across all shops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub queue_image_url: String,
    pub queue_counter: i64,
    pub is_available: bool,
    pub tag: String,
    pub shop_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub status: String,
}
