mod cex_lister;
mod runner;

pub use cex_lister::CexListerPort;
pub use runner::{OutputEvent, ProcessRunner};
