pub mod address;
pub mod geo;
