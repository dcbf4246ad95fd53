use mockall::mock;

use crate::models::{
    DbClass, DbClassTimetableRow, DbClassWithCount, DbSetting, DbStudent, DbStudentWithClass,
    DbSubject, DbTeacher, DbTeacherTimetableRow, DbTimetableEntry,
};
use schoolsync_core::models::{
    class::{CreateClassRequest, UpdateClassRequest},
    student::{CreateStudentRequest, UpdateStudentRequest},
    subject::CreateSubjectRequest,
    teacher::{CreateTeacherRequest, UpdateTeacherRequest},
};

// Mock repositories for testing
mock! {
    pub StudentRepo {
        pub async fn list_students(&self) -> eyre::Result<Vec<DbStudentWithClass>>;

        pub async fn get_student_by_id(
            &self,
            student_id: i32,
        ) -> eyre::Result<Option<DbStudentWithClass>>;

        pub async fn create_student(
            &self,
            request: CreateStudentRequest,
        ) -> eyre::Result<DbStudent>;

        pub async fn update_student(
            &self,
            student_id: i32,
            request: UpdateStudentRequest,
        ) -> eyre::Result<DbStudent>;

        pub async fn delete_student(&self, student_id: i32) -> eyre::Result<bool>;
    }
}

mock! {
    pub TeacherRepo {
        pub async fn list_teachers(&self) -> eyre::Result<Vec<DbTeacher>>;

        pub async fn get_teacher_by_id(
            &self,
            teacher_id: i32,
        ) -> eyre::Result<Option<DbTeacher>>;

        pub async fn create_teacher(
            &self,
            request: CreateTeacherRequest,
        ) -> eyre::Result<DbTeacher>;

        pub async fn update_teacher(
            &self,
            teacher_id: i32,
            request: UpdateTeacherRequest,
        ) -> eyre::Result<DbTeacher>;

        pub async fn delete_teacher(&self, teacher_id: i32) -> eyre::Result<bool>;
    }
}

mock! {
    pub ClassRepo {
        pub async fn list_classes(&self) -> eyre::Result<Vec<DbClassWithCount>>;

        pub async fn get_class_by_id(&self, class_id: i32) -> eyre::Result<Option<DbClass>>;

        pub async fn create_class(&self, request: CreateClassRequest) -> eyre::Result<DbClass>;

        pub async fn update_class(
            &self,
            class_id: i32,
            request: UpdateClassRequest,
        ) -> eyre::Result<DbClass>;

        pub async fn delete_class(&self, class_id: i32) -> eyre::Result<bool>;
    }
}

mock! {
    pub SubjectRepo {
        pub async fn list_subjects(&self) -> eyre::Result<Vec<DbSubject>>;

        pub async fn create_subject(
            &self,
            request: CreateSubjectRequest,
        ) -> eyre::Result<DbSubject>;

        pub async fn delete_subject(&self, subject_id: i32) -> eyre::Result<bool>;
    }
}

mock! {
    pub SettingsRepo {
        pub async fn list_settings(&self) -> eyre::Result<Vec<DbSetting>>;

        pub async fn upsert_setting(
            &self,
            key: &'static str,
            value: &'static str,
        ) -> eyre::Result<DbSetting>;
    }
}

mock! {
    pub TimetableRepo {
        pub async fn list_for_class(
            &self,
            class_id: i32,
        ) -> eyre::Result<Vec<DbClassTimetableRow>>;

        pub async fn list_for_teacher(
            &self,
            teacher_id: i32,
        ) -> eyre::Result<Vec<DbTeacherTimetableRow>>;

        pub async fn upsert_entry(
            &self,
            class_id: i32,
            day_of_week: &'static str,
            start_time: &'static str,
            end_time: &'static str,
            subject_id: i32,
            teacher_id: i32,
        ) -> eyre::Result<DbTimetableEntry>;

        pub async fn delete_entry(&self, timetable_id: i32) -> eyre::Result<bool>;
    }
}
