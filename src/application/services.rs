//! Handler wiring.

use std::sync::Arc;

use crate::ports::{
    JobQueue, JobRepository, MediaRepository, SessionNotifier, SessionRepository,
    SourceRepository,
};

use super::handlers::{
    AddAllMediaHandler, AddJobHandler, AddMediaHandler, CreateSessionHandler, GetJobHandler,
    GetSessionHandler, GetSessionJobsHandler, GetSessionMediaHandler, GetSourcesHandler, RegisterSourceHandler,
    SetRecordingHandler, UpdateJobHandler, UpdateSessionHandler,
};

/// Every handler, constructed once and shared across requests.
#[derive(Clone)]
pub struct Services {
    pub create_session: Arc<CreateSessionHandler>,
    pub get_session: Arc<GetSessionHandler>,
    pub update_session: Arc<UpdateSessionHandler>,
    pub set_recording: Arc<SetRecordingHandler>,
    pub register_source: Arc<RegisterSourceHandler>,
    pub add_media: Arc<AddMediaHandler>,
    pub add_all_media: Arc<AddAllMediaHandler>,
    pub get_session_media: Arc<GetSessionMediaHandler>,
    pub add_job: Arc<AddJobHandler>,
    pub get_job: Arc<GetJobHandler>,
    pub get_session_jobs: Arc<GetSessionJobsHandler>,
    pub update_job: Arc<UpdateJobHandler>,
}

impl Services {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        sources: Arc<dyn SourceRepository>,
        media: Arc<dyn MediaRepository>,
        jobs: Arc<dyn JobRepository>,
        notifier: Arc<dyn SessionNotifier>,
        queue: Arc<dyn JobQueue>,
        queue_name: &str,
    ) -> Self {
        let get_sources = Arc::new(GetSourcesHandler::new(sources.clone()));
        let get_session = Arc::new(GetSessionHandler::new(sessions.clone(), get_sources));
        let update_session = Arc::new(UpdateSessionHandler::new(sessions.clone()));
        let get_session_media = Arc::new(GetSessionMediaHandler::new(media.clone()));
        let add_media = Arc::new(AddMediaHandler::new(media));
        let add_job = Arc::new(AddJobHandler::new(
            jobs.clone(),
            notifier.clone(),
            queue,
            queue_name,
        ));

        Self {
            create_session: Arc::new(CreateSessionHandler::new(sessions)),
            set_recording: Arc::new(SetRecordingHandler::new(
                get_session.clone(),
                update_session.clone(),
                notifier.clone(),
            )),
            register_source: Arc::new(RegisterSourceHandler::new(sources, notifier)),
            add_all_media: Arc::new(AddAllMediaHandler::new(add_media.clone(), add_job.clone())),
            get_job: Arc::new(GetJobHandler::new(jobs.clone())),
            get_session_jobs: Arc::new(GetSessionJobsHandler::new(jobs.clone())),
            update_job: Arc::new(UpdateJobHandler::new(jobs)),
            get_session,
            get_session_media,
            update_session,
            add_media,
            add_job,
        }
    }
}
