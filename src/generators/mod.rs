pub mod password;
pub mod strength;

pub use password::PasswordGenerator;
pub use strength::StrengthScorer;
