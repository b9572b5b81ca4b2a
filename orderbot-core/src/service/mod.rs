pub mod errors;
pub mod reporter;
pub mod submitter;

pub use errors::ServiceError;
pub use reporter::Reporter;
pub use submitter::OrderSubmitter;
