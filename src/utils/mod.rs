pub mod sanitize;

pub use sanitize::{sanitize_argument, sanitize_arguments};
