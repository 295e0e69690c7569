pub mod config;
pub mod console_interface;
pub mod core;
pub mod level_format;
pub mod logging;
#[cfg(test)]
mod test;
