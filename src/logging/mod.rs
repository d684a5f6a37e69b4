mod console;
mod site;

pub use console::{init_log, ConsoleFormatter};
pub use site::{AddressLog, SiteLog};
