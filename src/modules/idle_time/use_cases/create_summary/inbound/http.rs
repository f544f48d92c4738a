use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::idle_time::use_cases::create_summary::handler::CreateSummaryHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shell::state::AppState;

/// Accepts a timeclock export as CSV text and answers with the four summary tables.
pub async fn handle(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let table = match InputTable::from_csv_str(&body) {
        Ok(table) => table,
        Err(err) => {
            let err = ApplicationError::from(err);
            return (err.status_code(), err.to_string()).into_response();
        }
    };

    let handler = CreateSummaryHandler::new(state.idle_time.clone(), state.report_sink.clone());
    match handler.handle(&table).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "idle time summary failed");
            (err.status_code(), err.to_string()).into_response()
        }
    }
}
