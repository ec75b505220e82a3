pub mod address_service;
pub mod address_service_interface;
