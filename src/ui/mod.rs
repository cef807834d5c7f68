pub mod art;
pub mod input;
pub mod renderer;
pub mod screens;
pub mod terminal;
