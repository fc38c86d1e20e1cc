pub mod bootstrap;
pub mod config;
pub mod envelope;
pub mod handlers;
pub mod router;
pub mod state;

pub use bootstrap::{BootstrapError, Services, build_services};
pub use config::{Environment, Settings};
pub use envelope::{ErrorStatusPolicy, ResponseEnvelope};
pub use router::create_router;
pub use state::AppState;
