mod indexer;
mod slug;

pub use indexer::index_headings_with_levels;
