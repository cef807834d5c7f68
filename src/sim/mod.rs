pub mod command;
pub mod event;
pub mod scores;
pub mod session;
pub mod step;
pub mod world;
