pub mod health;
pub mod parse;

pub use health::health_check;
pub use parse::parse;
