//! Vehicle registry handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use uuid::Uuid;

use core_kernel::{CustomerId, VehicleRecordId};
use domain_ledger::{vehicle::SUGGESTION_MIN_CHARS, VehicleNumber, VehicleRecord};
use infra_db::VehicleRepository;

use crate::auth::{require_admin, Claims};
use crate::dto::vehicles::*;
use crate::error::ApiError;
use crate::AppState;

/// Every remembered vehicle number
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let records = VehicleRepository::new(state.pool.clone()).list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Autocomplete search; queries under the minimum length match nothing
pub async fn search_vehicles(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    if query.q.trim().chars().count() < SUGGESTION_MIN_CHARS {
        return Ok(Json(vec![]));
    }

    let records = VehicleRepository::new(state.pool.clone())
        .search(&query.q)
        .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Adds or refreshes a registry entry
pub async fn add_vehicle(
    State(state): State<AppState>,
    Json(request): Json<AddVehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let mut record = VehicleRecord::new(VehicleNumber::new(&request.vehicle_number)?);
    if let Some(customer_id) = request.customer_id {
        record = record.for_customer(CustomerId::from_uuid(customer_id));
    }
    if let Some(vehicle_type) = request.vehicle_type {
        record = record.of_type(vehicle_type);
    }

    VehicleRepository::new(state.pool.clone()).upsert(&record).await?;

    Ok(Json(record.into()))
}

/// Hard-deletes a registry entry. Admin only.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&claims)?;

    VehicleRepository::new(state.pool.clone())
        .delete(VehicleRecordId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "deleted": id })))
}
