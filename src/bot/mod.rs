pub mod commands;
pub mod handlers;
pub mod intent;
pub mod keyboards;
