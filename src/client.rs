//! Classification request gateway.
//!
//! Keep the public surface small and predictable. Implementation details are
//! split into submodules under `src/client/`.

mod backend;
pub mod builder;
pub mod gateway;
mod response;
pub mod session;
pub mod validation;

pub use backend::ClassificationBackend;
pub use builder::GatewayBuilder;
pub use gateway::ClassificationGateway;
pub use session::{SubmissionSession, SubmissionState};
pub use validation::validate_file;
