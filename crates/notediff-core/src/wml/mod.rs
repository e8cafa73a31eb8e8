mod document;
mod region;

pub use document::WmlDocument;
pub use region::{build_note_region, NoteRegion, RegionNode};
