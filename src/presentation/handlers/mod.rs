mod audio_files;
mod health;
mod summarize;

pub use audio_files::{AudioFilesQuery, audio_files_handler};
pub use health::health_handler;
pub use summarize::summarize_handler;
