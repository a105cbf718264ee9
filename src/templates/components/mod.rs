pub mod card;
pub mod error;

pub use card::card;
pub use error::render_error_page;
