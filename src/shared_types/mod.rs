mod comparison;
mod errors;
mod site;

pub use comparison::*;
pub use errors::*;
pub use site::*;
