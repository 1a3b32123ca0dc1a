//! Job command and query handlers.

mod add_job;
mod get_job;
mod update_job;

pub use add_job::{AddJobCommand, AddJobHandler};
pub use get_job::{GetJobHandler, GetSessionJobsHandler};
pub use update_job::{UpdateJobCommand, UpdateJobHandler};
