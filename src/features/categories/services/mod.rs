mod category_service;

pub use category_service::{compose_display_path, CategoryService};
