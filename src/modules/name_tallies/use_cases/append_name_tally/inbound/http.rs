use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::name_tallies::use_cases::append_name_tally::command::AppendNameTally;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AppendNameTallyBody {
    pub name: String,
    pub tally: i64,
}

#[derive(Serialize)]
pub struct AppendNameTallyResponse {
    pub count: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AppendNameTallyBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected append body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let count = state.append_handler.handle(AppendNameTally {
        name: body.name,
        tally: body.tally,
    });

    (StatusCode::CREATED, Json(AppendNameTallyResponse { count })).into_response()
}
