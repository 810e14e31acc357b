mod override_handler;

pub use override_handler::*;
