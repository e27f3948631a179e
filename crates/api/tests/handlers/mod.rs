mod availability_test;
mod feedback_test;
mod user_test;
