pub mod jobs;
pub mod jwt;
pub mod resumes;
pub mod users;
