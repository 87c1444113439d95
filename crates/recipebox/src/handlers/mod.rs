pub mod error;
pub mod health;
pub mod profiles;

pub use error::AppError;
