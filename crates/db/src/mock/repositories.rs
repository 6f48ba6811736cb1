use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbCalendarEvent, DbEvent, DbStudent, DbSubject, DbTeacher};

// Mock repositories for testing

mock! {
    pub SubjectRepo {
        pub async fn create_subject(
            &self,
            code: &'static str,
            name: &'static str,
            description: &'static str,
            credits: i32,
            semester: &'static str,
            created_by: Uuid,
        ) -> eyre::Result<DbSubject>;

        pub async fn get_subject_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSubject>>;

        pub async fn get_subject_by_code(
            &self,
            code: &'static str,
        ) -> eyre::Result<Option<DbSubject>>;

        pub async fn list_subjects_created_by(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbSubject>>;

        pub async fn list_subjects_scheduled_by_user(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbSubject>>;

        pub async fn update_subject(
            &self,
            id: Uuid,
            code: Option<&'static str>,
            name: Option<&'static str>,
        ) -> eyre::Result<DbSubject>;

        pub async fn delete_subject(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub EventRepo {
        pub async fn create_event(
            &self,
            subject_id: Uuid,
            event_type: &'static str,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> eyre::Result<DbEvent>;

        pub async fn get_event_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbEvent>>;

        pub async fn get_events_by_subject_id(
            &self,
            subject_id: Uuid,
        ) -> eyre::Result<Vec<DbEvent>>;

        pub async fn get_events_for_subjects(
            &self,
            subject_ids: Vec<Uuid>,
        ) -> eyre::Result<Vec<DbCalendarEvent>>;

        pub async fn delete_event(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ProfileRepo {
        pub async fn create_student(
            &self,
            user_id: Uuid,
            student_number: &'static str,
        ) -> eyre::Result<DbStudent>;

        pub async fn get_student_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbStudent>>;

        pub async fn create_teacher(
            &self,
            user_id: Uuid,
            teacher_number: &'static str,
        ) -> eyre::Result<DbTeacher>;

        pub async fn get_teacher_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbTeacher>>;

        pub async fn add_schedule_entry(
            &self,
            student_id: Uuid,
            subject_id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn remove_schedule_entry(
            &self,
            student_id: Uuid,
            subject_id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn schedule_contains(
            &self,
            student_id: Uuid,
            subject_id: Uuid,
        ) -> eyre::Result<bool>;

        pub async fn get_scheduled_subject_ids(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<Uuid>>;
    }
}
