//! Brand (manufacturer) catalog feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/brands` | No | List all brands |
//! | GET | `/api/brands/{slug}` | No | Get a brand by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BrandService;
