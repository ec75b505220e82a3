pub mod openapi;
pub mod server;
