pub mod jobs;
pub mod resumes;
pub mod users;
