pub mod factory;
pub mod provider;

pub use factory::{EmptyResponseFactory, ResponseFactory, ResponseFactoryService, FAMILIES};
pub use provider::ResponseProvider;
