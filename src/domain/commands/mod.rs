//! Built-in commands and the catalog resolving them.

mod catalog;
mod echo;
mod locale_command;
mod sleep;

pub use catalog::CommandCatalog;
pub use echo::EchoCommand;
pub use locale_command::LocaleCommand;
pub use sleep::SleepCommand;
