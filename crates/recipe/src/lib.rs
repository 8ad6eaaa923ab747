mod catalog;
mod error;
mod view;

pub use catalog::*;
pub use error::*;
pub use view::*;
