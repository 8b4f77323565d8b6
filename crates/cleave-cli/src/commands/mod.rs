pub mod canon;
pub mod check;
pub mod input_loader;
