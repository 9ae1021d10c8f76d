pub mod chef_controller;

pub use chef_controller::configure;
