pub mod filter;
pub mod forms;
pub mod listing;
pub mod search;

pub use filter::FilterCriteria;
pub use listing::{Listing, RecordId};
pub use search::{ListingSearch, LoadState};
