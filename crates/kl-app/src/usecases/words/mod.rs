//! Word catalog administration use cases.

pub mod upload_words;

pub use upload_words::UploadWords;
