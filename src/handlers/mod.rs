pub mod health;
pub mod sos;

pub use health::health_check;
pub use sos::send_sos;
