mod env;
mod provision;
mod render;
