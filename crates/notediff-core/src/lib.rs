pub mod compare;
pub mod error;
pub mod extract;
pub mod package;
pub mod settings;
pub mod types;
pub mod util;
pub mod wml;
pub mod xml;

pub use error::{NotediffError, Result};

pub use compare::{
    compare_batch, compare_footnotes, comparison_rows, BaseFootnotes, BatchReport,
    ComparisonResult, ComparisonRow, ComparisonRun, ComparisonSession, ExtraFootnotePool,
    PoolEntry, RowStatus, VariantFailure,
};
pub use extract::{extract_footnotes, flatten_region, FootnoteExtractor};
pub use settings::ExtractorSettings;
pub use types::{Footnote, FootnoteLayout, NoteKind};
pub use wml::{NoteRegion, RegionNode, WmlDocument};
