//! HTTP middleware stack for the server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. CORS (permissive; the API is public and read-mostly)
//! 3. Body limit (512 KiB JSON payloads)
//! 4. Security headers
//! 5. Rate limiting (governor, `/api` only)

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::api_rate_limiter;
pub use security_headers::security_headers_middleware;
