pub mod handlers;
pub mod parameters;
pub mod router;
