pub mod chef_service;

pub use chef_service::{hash_password, verify_password, ChefService};
