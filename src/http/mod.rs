//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID assigned and propagated)
//!     → rover.rs (GET info / POST move on the API path)
//!     → response.rs (JSON bodies, error mapping)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod rover;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::HttpServer;
