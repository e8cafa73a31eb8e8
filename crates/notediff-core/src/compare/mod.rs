mod batch;
mod engine;
mod pool;
mod rows;
mod session;

pub use batch::{
    compare_batch, display_name, pool_from_results, BatchReport, ComparisonRun, VariantFailure,
};
pub use engine::{compare_footnotes, BaseFootnotes, ComparisonResult};
pub use pool::{ExtraFootnotePool, PoolEntry};
pub use rows::{comparison_rows, ComparisonRow, RowStatus};
pub use session::ComparisonSession;
