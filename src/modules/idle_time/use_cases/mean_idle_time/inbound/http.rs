use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::idle_time::use_cases::mean_idle_time::handler::MeanIdleTimeHandler;
use crate::modules::idle_time::use_cases::mean_idle_time::projection::MeanIdleTimeTable;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match mean_from_csv(&state, &body).await {
        Ok(mean) => Json(mean).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "mean idle time failed");
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

async fn mean_from_csv(
    state: &AppState,
    body: &str,
) -> Result<MeanIdleTimeTable, ApplicationError> {
    let table = InputTable::from_csv_str(body)?;
    MeanIdleTimeHandler::new(state.idle_time.clone(), state.report_sink.clone())
        .handle(&table)
        .await
}
