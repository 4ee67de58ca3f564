//! Business logic services.
//!
//! Services contain the logic behind the HTTP handlers: store access,
//! identifier allocation, rate lookup and password hashing.

pub mod password;
pub mod rates;
pub mod transaction_service;
pub mod user_service;
