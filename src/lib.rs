//! Chef persistence service
//!
//! CRUD and paged username search over the `CHEF` table, exposed both as a
//! repository API and as actix-web routes.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::chefs;
pub use modules::health;
