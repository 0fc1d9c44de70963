pub mod auth;
pub mod health;
pub mod jobs;
pub mod resumes;
pub mod templates;

pub use auth::*;
pub use health::*;
pub use jobs::*;
pub use resumes::*;
pub use templates::*;
