pub mod address_repository;
