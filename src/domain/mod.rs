pub mod crystal;
pub mod grid;
pub mod portal;
pub mod spawn;
pub mod symbol;
pub mod trail;
pub mod wizard;
