pub mod aggregate;
pub mod filter;
pub mod listing;
pub mod ranking;
pub mod slug;
