mod uninstall;

pub use uninstall::*;
