pub mod emotion;
pub mod patient;
pub mod session;

pub use emotion::*;
pub use patient::*;
pub use session::*;
