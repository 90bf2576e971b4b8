pub mod catalogue;
pub mod debug_console;
pub mod spotlight;
