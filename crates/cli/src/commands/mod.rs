pub mod errors;
pub mod positions;
pub mod signals;
