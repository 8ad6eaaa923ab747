mod error;
mod favorites;
mod memory;
mod persistence;
mod plan;
mod store;

pub use error::*;
pub use favorites::*;
pub use memory::*;
pub use persistence::*;
pub use plan::*;
pub use store::*;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod local;

        pub use local::*;
    }
}
