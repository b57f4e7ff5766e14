pub mod file_ops;
pub mod validation;

pub use file_ops::{load_config, load_items};
pub use validation::{parse_actions, BrowseAction, ValidationError};
