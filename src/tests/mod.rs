mod aggregate_tests;
mod router_tests;
mod slug_tests;
pub mod utils;
