pub mod analysis;
pub mod domain;
pub mod error;
pub mod lexicon;
pub mod text;
pub mod transcript;

pub use analysis::*;
pub use domain::*;
pub use error::{Error, Result};
pub use lexicon::*;
pub use transcript::*;
