pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Chef, ChefRequest};
pub use repositories::{ChefRepository, MySqlChefRepository};
pub use services::ChefService;
