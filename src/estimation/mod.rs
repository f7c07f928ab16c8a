mod error;
mod estimator;
pub mod message;
mod record;
mod selector;

pub use error::EstimateError;
pub use estimator::{FamilyEstimate, estimate_family, estimate_laplace, estimate_normal};
pub use message::{laplace_message_length, log_likelihood, message_length, normal_message_length};
pub use record::{EstimatesRecord, ModelFit, estimate, estimate_sample};
pub use selector::{higher_likelihood, shorter_message};
