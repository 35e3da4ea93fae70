pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Assignment, AssignmentStatus, Submission};
pub use requests::{AssignmentPayload, GradeRequest};
pub use responses::StudentAssignment;
