mod roast_endpoint;
mod submission;

pub use roast_endpoint::{api_router, RoastResponse};
pub use submission::RoastSubmission;
