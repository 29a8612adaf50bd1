//! Analysis history: client-side pagination and display helpers.

pub mod format;
pub mod pager;

pub use format::{format_timestamp, sequence_preview};
pub use pager::{HistoryPager, LoadState, PageLink};
