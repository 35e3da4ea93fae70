pub mod entities;
pub mod requests;

pub use entities::Notice;
pub use requests::NoticePayload;
