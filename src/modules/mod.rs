pub mod chefs;
pub mod health;
