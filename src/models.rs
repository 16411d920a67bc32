pub mod analysis_client;
pub mod analysis_request;
pub mod credentials;
pub mod detection_case;
pub mod endpoint_response;

pub use analysis_client::{AnalyzeClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, Flow};
pub use analysis_request::*;
pub use credentials::VerifyToken;
pub use detection_case::{CaseName, DetectionCase};
pub use endpoint_response::EndpointResponse;
