pub mod chef;

pub use chef::{Chef, ChefRequest};
