pub mod console;
pub mod formatters;
pub mod network;
pub mod oracle;
