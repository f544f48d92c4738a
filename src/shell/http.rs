use axum::{Router, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::efficiency::use_cases::employee_efficiency::inbound::http as employee_http;
use crate::modules::efficiency::use_cases::item_efficiency::inbound::http as item_http;
use crate::modules::efficiency::use_cases::operation_efficiency::inbound::http as operation_http;
use crate::modules::idle_time::use_cases::create_summary::inbound::http as summary_http;
use crate::modules::idle_time::use_cases::mean_idle_time::inbound::http as mean_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/idle-time/summary", post(summary_http::handle))
        .route("/idle-time/mean", post(mean_http::handle))
        .route("/efficiency/employees", post(employee_http::handle))
        .route("/efficiency/operations", post(operation_http::handle))
        .route("/efficiency/items", post(item_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
