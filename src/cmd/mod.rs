pub mod batch;
pub mod profiles;
pub mod score;
