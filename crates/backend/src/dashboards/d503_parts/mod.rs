pub mod service;
pub mod simulator;
