pub mod layout_controller;
pub mod layout_state;
pub mod layout_table;
pub mod observer;
pub mod selection_summary;
pub mod view;

pub use layout_controller::{LayoutController, Transition};
pub use layout_state::{LayoutState, NavigationControls};
pub use layout_table::{focus_resolution, LayoutEntry};
pub use observer::LayoutObserver;
pub use selection_summary::selection_summary;
pub use view::{render, EditorView, SectionView};
