//! Virtual brand-category pages: `/{brand}/{category_base}/{path}/`
//! renders the category listing narrowed to the brand, with override
//! metadata, rewritten outward URLs and a spliced breadcrumb trail.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/shop/{*path}` | None | Render a (brand-)category page |

pub mod breadcrumbs;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod routes;
pub mod services;
pub mod url;
