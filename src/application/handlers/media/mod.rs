//! Media intake handlers and the session media listing.

mod add_all_media;
mod add_media;
mod get_session_media;

pub use add_all_media::{AddAllMediaCommand, AddAllMediaHandler, IntakeFailure, IntakeReport};
pub use add_media::{AddMediaCommand, AddMediaHandler};
pub use get_session_media::GetSessionMediaHandler;
