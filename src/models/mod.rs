/// Token records and symbol resolution
pub mod token;
