pub mod address;
pub mod business_rule_interface;
pub mod server;
