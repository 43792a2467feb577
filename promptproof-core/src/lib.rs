mod error;
mod provider;
mod response;
mod value;

pub use error::ProofError;
pub use provider::LlmProvider;
pub use response::{LlmResponse, LlmResponseBuilder};
pub use value::{Metadata, Value};
