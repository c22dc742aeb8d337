// Public modules
pub mod android;
pub mod build_settings;
pub mod error;
pub mod ios;
pub mod line_file;
pub mod plist;

// Re-export common types for convenience
pub use android::AndroidProject;
pub use error::{Error, Result};
pub use ios::IosProject;
