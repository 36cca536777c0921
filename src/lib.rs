//! Minimal in-process HTTP request router.
//!
//! Routes are `"METHOD /path/{capture}"` patterns mapped to handlers that
//! declare their parameters up front. Dispatch picks the first matching
//! pattern in registration order, sanitizes the captured path arguments and
//! calls the handler with them, the request, or a response from the
//! [ResponseProvider].
//!
//! # Example usage
//!
//! ```
//! use http::{Method, StatusCode};
//! use router::{Arguments, Handler, Param, Request, Response, Router};
//!
//! let mut router = Router::new();
//! router.map(
//!     "GET /hello/{name}",
//!     Handler::new([Param::Arg, Param::Response], |args: Arguments| {
//!         let name = args.text(0).unwrap_or_default();
//!         args.response()
//!             .cloned()
//!             .unwrap_or_default()
//!             .with_body(format!("Hello, {name}!"))
//!     }),
//! );
//!
//! let response: Response = router
//!     .dispatch(&Request::new(Method::GET, "/hello/world"))
//!     .unwrap();
//! assert_eq!(response.status, StatusCode::OK);
//! assert_eq!(response.body(), b"Hello, world!");
//! ```
pub mod error;
pub mod http;
pub mod response;
pub mod router;
pub mod utils;

pub use error::{Error, Result};
pub use crate::http::{HeaderMapExt, Request, Response};
pub use response::{EmptyResponseFactory, ResponseFactory, ResponseProvider};
pub use router::{Arguments, Handler, Param, Router, Target, Value};
pub use utils::{sanitize_argument, sanitize_arguments};
