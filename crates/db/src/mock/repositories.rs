use async_trait::async_trait;
use caresync_core::{
    errors::CareResult,
    models::{
        appointment::{Appointment, AppointmentStatus, NewAppointment},
        availability::{Availability, AvailableSlot, NewAvailability},
        feedback::{Feedback, NewFeedback},
        user::{NewUser, User},
    },
    store::{AppointmentStore, AvailabilityStore, FeedbackStore, UserStore},
};
use mockall::mock;

// Mock stores for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn get_all(&self) -> CareResult<Vec<Appointment>>;

        async fn get_by_id(&self, id: i32) -> CareResult<Option<Appointment>>;

        async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Appointment>>;

        async fn get_by_patient_id(&self, patient_id: i32) -> CareResult<Vec<Appointment>>;

        async fn create(&self, appointment: NewAppointment) -> CareResult<Appointment>;

        async fn update_status(
            &self,
            id: i32,
            status: AppointmentStatus,
        ) -> CareResult<Option<Appointment>>;

        async fn delete(&self, id: i32) -> CareResult<bool>;
    }
}

mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilityStore for AvailabilityRepo {
        async fn get_all(&self) -> CareResult<Vec<Availability>>;

        async fn get_by_id(&self, id: i32) -> CareResult<Option<Availability>>;

        async fn get_by_caregiver_id(&self, caregiver_id: i32) -> CareResult<Vec<Availability>>;

        async fn create(&self, availability: NewAvailability) -> CareResult<Availability>;

        async fn update_slots(
            &self,
            id: i32,
            slots: Vec<AvailableSlot>,
        ) -> CareResult<Option<Availability>>;

        async fn delete(&self, id: i32) -> CareResult<bool>;
    }
}

mock! {
    pub FeedbackRepo {}

    #[async_trait]
    impl FeedbackStore for FeedbackRepo {
        async fn get_all(&self) -> CareResult<Vec<Feedback>>;

        async fn get_by_id(&self, id: i32) -> CareResult<Option<Feedback>>;

        async fn get_by_appointment_id(&self, appointment_id: i32) -> CareResult<Vec<Feedback>>;

        async fn create(&self, feedback: NewFeedback) -> CareResult<Feedback>;

        async fn delete(&self, id: i32) -> CareResult<bool>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserStore for UserRepo {
        async fn get_all(&self) -> CareResult<Vec<User>>;

        async fn get_by_id(&self, id: i32) -> CareResult<Option<User>>;

        async fn get_by_username(&self, username: &str) -> CareResult<Option<User>>;

        async fn create(&self, user: NewUser) -> CareResult<User>;

        async fn delete(&self, id: i32) -> CareResult<bool>;
    }
}
