pub mod authentication;
pub mod repositories;
