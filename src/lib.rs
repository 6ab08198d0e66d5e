pub mod config;
pub mod derive;
pub mod error;
pub mod profiles;
pub mod scorer;
pub mod variables;
// cmd and reports are binary modules (see main.rs).

pub use error::{LqError, LqResult};
pub use scorer::{CacMethod, RawRecord, ScoreResult, Scorer};
pub use variables::Variable;
