pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use paths::{expand_tilde, validate_file_size};
pub use terminal::sanitize_for_terminal;
