//! Dashboard route handlers.
//!
//! The GET handler aggregates the three backend datasets into a single
//! view-model bundle; the POST handler dispatches the two selection
//! actions that stash a chosen shop or user into the provider registry
//! before redirecting to its detail page.

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use queueboard_core::{QueueRecord, ShopFilter, ShopRecord, UserFilter, UserRecord};

use crate::backend::BackendError;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::provider::ProviderRegistry;
use crate::state::AppState;

/// Dataset-unavailable messages, rendered in place of each list.
const MSG_NO_SHOP_DATA: &str = "ไม่มีข้อมูลร้านค้า";
const MSG_NO_CUSTOMER_DATA: &str = "ไม่มีข้อมูลลูกค้า";
const MSG_NO_QUEUE_DATA: &str = "ไม่มีข้อมูลคิว";

/// Per-dataset failure messages; an empty string means the dataset loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMessages {
    pub shop: String,
    pub customer: String,
    pub queue: String,
}

/// Aggregated dashboard view-model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBundle {
    pub shops: Vec<ShopRecord>,
    pub customers: Vec<UserRecord>,
    pub queues: Vec<QueueRecord>,
    pub total_shops: usize,
    pub total_customers: usize,
    pub messages: DashboardMessages,
}

/// Dashboard loader.
#[instrument(skip(auth, state))]
pub async fn show(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> Json<DashboardBundle> {
    // The three datasets are independent; fetch them in parallel
    let shops_future = state.backend().shops_with_trashed(&auth.token);
    let customers_future = state.backend().users_with_trashed(&auth.token);
    let queues_future = state.backend().all_queues(&auth.token);

    let (shops, customers, queues) = tokio::join!(shops_future, customers_future, queues_future);

    Json(build_bundle(shops, customers, queues))
}

/// Reconcile the three fetch results into the dashboard bundle.
///
/// Failures are per-dataset and non-fatal: a failed dataset degrades to an
/// empty list, a zero total, and its fixed unavailable message, while the
/// other two are returned untouched.
fn build_bundle(
    shops: Result<Vec<ShopRecord>, BackendError>,
    customers: Result<Vec<UserRecord>, BackendError>,
    queues: Result<Vec<QueueRecord>, BackendError>,
) -> DashboardBundle {
    let mut messages = DashboardMessages::default();

    let shops = shops.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch shops: {e}");
        messages.shop = MSG_NO_SHOP_DATA.to_string();
        Vec::new()
    });

    let customers = customers.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch customers: {e}");
        messages.customer = MSG_NO_CUSTOMER_DATA.to_string();
        Vec::new()
    });

    let queues = queues.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch queues: {e}");
        messages.queue = MSG_NO_QUEUE_DATA.to_string();
        Vec::new()
    });

    DashboardBundle {
        total_shops: shops.len(),
        total_customers: customers.len(),
        shops,
        customers,
        queues,
        messages,
    }
}

// =============================================================================
// Selection action
// =============================================================================

/// Selection form payload.
///
/// A single form serves both branches: `_action` picks the branch and the
/// remaining fields are optional text inputs.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionForm {
    /// Branch discriminator; a missing or unknown value is a no-op.
    #[serde(rename = "_action", default)]
    pub action: String,
    #[serde(rename = "shopId")]
    pub shop_id: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_verified: Option<String>,
    pub image_url: Option<String>,
    pub is_open: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// Where a selection action sends the client next.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SelectionOutcome {
    /// Redirect to the given path.
    Redirect(String),
    /// Unknown discriminator; nothing happened.
    Ignored,
}

/// Selection action handler.
#[instrument(skip_all)]
pub async fn select(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<SelectionForm>,
) -> Result<Response, AppError> {
    match apply_selection(state.providers(), form).await? {
        SelectionOutcome::Redirect(path) => Ok(Redirect::to(&path).into_response()),
        SelectionOutcome::Ignored => Ok(().into_response()),
    }
}

/// Dispatch on the `_action` discriminator.
pub(crate) async fn apply_selection(
    providers: &ProviderRegistry,
    form: SelectionForm,
) -> Result<SelectionOutcome, AppError> {
    match form.action.as_str() {
        "show_shop" => select_shop(providers, form)
            .await
            .map(SelectionOutcome::Redirect),
        "show_user" => select_user(providers, form)
            .await
            .map(SelectionOutcome::Redirect),
        // Unknown discriminators fail silently
        _ => Ok(SelectionOutcome::Ignored),
    }
}

/// Stash the selected shop's filter and return the redirect path.
async fn select_shop(
    providers: &ProviderRegistry,
    form: SelectionForm,
) -> Result<String, AppError> {
    let Some(shop_id) = form.shop_id.filter(|id| !id.is_empty()) else {
        return Ok("/dashboard".to_string());
    };

    // Validate before mutating; a bad coordinate leaves the registry alone
    let latitude = parse_coordinate("latitude", form.latitude.as_deref())?;
    let longitude = parse_coordinate("longitude", form.longitude.as_deref())?;

    let filter = ShopFilter {
        id: shop_id.clone(),
        name: form.name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        address: form.address.unwrap_or_default(),
        phone: form.phone.unwrap_or_default(),
        is_verified: parse_verified_flag(form.is_verified.as_deref()),
        image_url: form.image_url.unwrap_or_default(),
        is_open: parse_checkbox(form.is_open.as_deref()),
        latitude,
        longitude,
        description: form.description.unwrap_or_default(),
        created_at: form.created_at.unwrap_or_default(),
        updated_at: form.updated_at.unwrap_or_default(),
        deleted_at: form.deleted_at.unwrap_or_default(),
    };

    providers.ensure_shop_seeded(&shop_id).await;
    providers.put_shop(filter).await;

    Ok(format!("/shop/{shop_id}"))
}

/// Stash the selected user's filter and return the redirect path.
async fn select_user(
    providers: &ProviderRegistry,
    form: SelectionForm,
) -> Result<String, AppError> {
    let Some(user_id) = form.user_id.filter(|id| !id.is_empty()) else {
        return Ok("/users".to_string());
    };

    let filter = UserFilter {
        id: user_id.clone(),
        name: form.name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        role: form.role.unwrap_or_default(),
        phone: form.phone.unwrap_or_default(),
        is_verified: parse_verified_flag(form.is_verified.as_deref()),
        image_url: form.image_url.unwrap_or_default(),
        created_at: form.created_at.unwrap_or_default(),
        updated_at: form.updated_at.unwrap_or_default(),
        deleted_at: form.deleted_at.unwrap_or_default(),
    };

    providers.ensure_user_seeded(&user_id).await;
    providers.put_user(filter).await;

    Ok(format!("/user/{user_id}"))
}

// =============================================================================
// Form field parsers
// =============================================================================

/// Parse the `is_verified` field: only the literal string "true" counts.
fn parse_verified_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parse a checkbox-style field.
///
/// Browsers omit unchecked checkboxes entirely and send "on" (or an
/// explicit value) for checked ones, so a missing field is false and an
/// explicit negative value is honored.
fn parse_checkbox(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v, "" | "false" | "0" | "off"),
    }
}

/// Parse a coordinate field.
///
/// A missing or empty field coerces to 0.0; anything else must parse as a
/// float.
fn parse_coordinate(field: &str, value: Option<&str>) -> Result<f64, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| AppError::BadRequest(format!("invalid numeric field: {field}"))),
    }
}
