pub mod file_magic;
pub mod files;
pub mod password;

pub use file_magic::detect_mime;
pub use files::{read_submission_file, read_submission_files};
pub use password::verify_password;
