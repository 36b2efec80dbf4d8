pub mod donation;
pub mod ngo;
