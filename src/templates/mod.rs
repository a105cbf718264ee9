pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, render_error_page};
pub use layouts::desktop::desktop_layout;
