pub mod document;
pub mod layout;
pub mod params;
pub mod region;
pub mod settings;

pub use document::SavedDocument;
pub use layout::{DocumentType, FirstPageLayout, LastPageLayout, PageSide};
pub use params::StartupParams;
pub use region::{PageRegions, Placement, Region, RegionName};
pub use settings::{LayoutSettings, LAYOUT_SETTINGS_KEY};
