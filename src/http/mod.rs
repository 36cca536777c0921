pub mod headers;
pub mod request;
pub mod response;

pub use headers::HeaderMapExt;
pub use request::Request;
pub use response::Response;
