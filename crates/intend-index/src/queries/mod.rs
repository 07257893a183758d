pub mod patient;
pub mod session;
