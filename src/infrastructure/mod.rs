pub mod constant;
pub mod error;
pub mod model;
pub mod persistence;
