//! Vehicle registry DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_ledger::{VehicleRecord, VehicleType};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct AddVehicleRequest {
    pub vehicle_number: String,
    pub customer_id: Option<Uuid>,
    pub vehicle_type: Option<VehicleType>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vehicle_number: String,
    pub customer_id: Option<Uuid>,
    pub vehicle_type: Option<VehicleType>,
    pub created_at: DateTime<Utc>,
}

impl From<VehicleRecord> for VehicleResponse {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: *record.id.as_uuid(),
            vehicle_number: record.vehicle_number.to_string(),
            customer_id: record.customer_id.map(|id| *id.as_uuid()),
            vehicle_type: record.vehicle_type,
            created_at: record.created_at,
        }
    }
}
