pub mod mpx_parser;
pub use mpx_parser::*;

pub mod network;
pub use network::*;
