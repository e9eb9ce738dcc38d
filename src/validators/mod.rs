pub mod username;

pub use username::UsernameValidator;
