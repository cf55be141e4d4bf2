pub mod entities;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
