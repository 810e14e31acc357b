pub mod override_resolver;

mod override_service;

pub use override_service::OverrideService;
