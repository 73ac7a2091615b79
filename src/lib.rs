pub mod build_info;
pub mod display;
pub mod model;
pub mod page;
pub mod stamp;
pub mod util;

pub use display::{DisplayError, Document, HtmlDocument, MemoryDocument};
pub use model::version::{VersionInfo, REVISION_PLACEHOLDER};
