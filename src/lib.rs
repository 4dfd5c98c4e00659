pub mod common;
pub mod data;
pub mod error;
pub mod probe;

pub use data::{LoginOutcome, LoginRequest, LoginSummary};
pub use error::NetworkError;
pub use probe::{run, Probe};
