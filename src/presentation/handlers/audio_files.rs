use axum::extract::{Query, State};
use serde::Deserialize;

use crate::presentation::envelope::ResponseEnvelope;
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AudioFilesQuery {
    pub bucket: Option<String>,
    pub prefix: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn audio_files_handler(
    State(state): State<AppState>,
    Query(query): Query<AudioFilesQuery>,
) -> ResponseEnvelope {
    match state
        .catalog
        .list(query.bucket.as_deref(), query.prefix.as_deref())
        .await
    {
        Ok(listing) => ResponseEnvelope::ok(&listing),
        Err(e) => {
            tracing::error!(error = %e, "Audio listing failed");
            ResponseEnvelope::error(&e, state.error_policy)
        }
    }
}
