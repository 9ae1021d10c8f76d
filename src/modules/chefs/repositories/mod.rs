pub mod chef_repository;

pub use chef_repository::{contains_pattern, ChefRepository, MySqlChefRepository};
