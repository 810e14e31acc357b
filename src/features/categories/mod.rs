//! Product category catalog feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories (flat or tree) |
//! | GET | `/api/categories/{slug}` | No | Get a category by slug |
//! | PUT | `/api/admin/categories/{id}/brand-visibility` | Basic | Toggle hidden-in-brand-view |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
