//! Request pipelines: inputs → model prediction → risk score → recommendation → response.
//!
//! Two entry points share the same shape and differ in which model they call,
//! which inputs feed the risk score and which transport vocabulary they print:
//!
//! - `BasicPipeline`: 3-feature model, no defect data, `Normal`/`Disrupted` labels
//! - `ExtendedPipeline`: 5-feature model, defect rate in the score, 3-way labels
//!
//! Pipelines hold nothing but their (shared, read-only) model, so one instance
//! serves any number of concurrent requests.

pub mod basic;
pub mod envelope;
pub mod error;
pub mod extended;
pub mod request;

pub use basic::BasicPipeline;
pub use envelope::ResponseEnvelope;
pub use error::PipelineError;
pub use extended::ExtendedPipeline;
pub use request::{BasicRequest, ExtendedRequest, defaults};
