pub mod collect;
pub mod env;
pub mod provision;
pub mod render;
