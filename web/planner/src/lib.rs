mod error;
pub mod render;
mod settings;
mod widget;

pub use error::*;
pub use settings::*;
pub use widget::*;
