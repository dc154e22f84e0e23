//! Text Model
//!
//! Character storage and location types shared by the scanning crates.

pub mod checkpoint;
pub mod error;
pub mod gap;
pub mod position;
pub mod store;

pub use checkpoint::Checkpoint;
pub use error::StoreError;
pub use gap::GapTextStore;
pub use position::Position;
pub use store::{CharStore, TextStore};
