use axum::Json;
use service::telemetry::{self, SystemStatus, Temperatures, WaterLevel};

pub async fn temperatures() -> Json<Temperatures> {
    Json(telemetry::temperatures())
}

pub async fn water_level() -> Json<WaterLevel> {
    Json(telemetry::water_level())
}

pub async fn system_status() -> Json<SystemStatus> {
    Json(telemetry::system_status())
}
