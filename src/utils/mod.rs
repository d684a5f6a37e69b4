pub mod document;
pub mod net;
pub mod paths;
