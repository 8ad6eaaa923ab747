mod day;
mod filter;
mod recipe;

pub use day::*;
pub use filter::*;
pub use recipe::*;
