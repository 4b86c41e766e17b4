pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod shutdown;

pub use domain::user;
pub use outbound::repositories;
