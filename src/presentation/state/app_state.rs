use std::sync::Arc;

use crate::application::services::{AudioCatalog, SummarizationPipeline};
use crate::presentation::envelope::ErrorStatusPolicy;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummarizationPipeline>,
    pub catalog: Arc<AudioCatalog>,
    pub error_policy: ErrorStatusPolicy,
}
