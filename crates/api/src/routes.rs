pub mod class;
pub mod health;
pub mod settings;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod timetable;
