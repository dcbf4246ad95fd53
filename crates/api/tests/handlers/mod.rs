mod middleware_test;
mod students_test;
mod timetable_test;
