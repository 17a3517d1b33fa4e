pub mod editors;
pub mod store;

pub use editors::{EditorSet, RegionEditors};
pub use store::{ContentStore, FileStore, MemoryStore};
