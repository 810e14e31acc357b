//! Per (brand, category) content overrides stored in the settings
//! repository, plus the resolver that turns them into effective
//! display/SEO metadata.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/brand-contents` | Basic | List override records |
//! | POST | `/api/admin/brand-contents` | Basic | Create an override record |
//! | GET | `/api/admin/brand-contents/{key}` | Basic | Get one record |
//! | PUT | `/api/admin/brand-contents/{key}` | Basic | Overwrite record fields |
//! | DELETE | `/api/admin/brand-contents/{key}` | Basic | Delete record + index entry |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OverrideService;
