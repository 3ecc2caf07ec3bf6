pub mod controls;
pub mod handlers;
pub mod header;
pub mod media_input;
pub mod stage;
pub mod utils;
