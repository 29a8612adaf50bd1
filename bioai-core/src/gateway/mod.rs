//! Backend access: transport abstraction, navigation hook and the typed gateway.

pub mod client;
pub mod navigator;
pub mod transport;

pub use client::{server_message, Gateway};
pub use navigator::Navigator;
pub use transport::{ApiRequest, Method, RawResponse, ReqwestTransport, RequestBody, Transport};
