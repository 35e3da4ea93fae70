pub mod entities;

pub use entities::{DownloadedFile, SubmissionFile};
