use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::efficiency::use_cases::operation_efficiency::report::operation_efficiency;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let report = InputTable::from_csv_str(&body)
        .and_then(|table| operation_efficiency(&table, &state.efficiency))
        .map_err(ApplicationError::from);
    match report {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "operation efficiency failed");
            (err.status_code(), err.to_string()).into_response()
        }
    }
}
