use std::sync::Arc;

use axum_test::TestServer;
use caresync_api::{ApiState, router};
use caresync_db::mock::repositories::{
    MockAppointmentRepo, MockAvailabilityRepo, MockFeedbackRepo, MockUserRepo,
};

pub struct TestContext {
    pub appointment_repo: MockAppointmentRepo,
    pub availability_repo: MockAvailabilityRepo,
    pub feedback_repo: MockFeedbackRepo,
    pub user_repo: MockUserRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            appointment_repo: MockAppointmentRepo::new(),
            availability_repo: MockAvailabilityRepo::new(),
            feedback_repo: MockFeedbackRepo::new(),
            user_repo: MockUserRepo::new(),
        }
    }

    // Build state with mock repositories
    pub fn build_state(self) -> Arc<ApiState> {
        Arc::new(ApiState {
            appointments: Arc::new(self.appointment_repo),
            availabilities: Arc::new(self.availability_repo),
            feedback: Arc::new(self.feedback_repo),
            users: Arc::new(self.user_repo),
        })
    }

    // Serve the full router over the mocks; expectations are checked when the server drops
    pub fn into_server(self) -> TestServer {
        TestServer::new(router(self.build_state())).expect("Failed to start test server")
    }
}
