use std::sync::{Arc, Mutex};

use axum::Json;
use mockall::predicate;
use pretty_assertions::assert_eq;

use schoolsync_api::middleware::{auth::ActorRole, error_handling::AppError};
use schoolsync_core::{
    errors::SchoolError,
    models::timetable::{SaveTimetableRequest, ScheduleResponse, TimetableEntry},
    schedule::{
        grid::{CLASS_SLOTS, Day, TEACHER_SLOTS, WeeklyGrid},
        time::end_of_period,
        workflow::ScheduleForm,
    },
};
use schoolsync_db::models::DbTeacherTimetableRow;

use crate::test_utils::{TestContext, class_timetable_row, db_class, db_entry, db_teacher};

// Test wrappers that mirror the handler logic against mock repositories
// instead of a live pool.

fn render(entries: Vec<TimetableEntry>, slots: &'static [&'static str]) -> ScheduleResponse {
    let grid = WeeklyGrid::build(&entries, &Day::WEEK, slots);
    let cells = grid.to_cells();

    ScheduleResponse {
        days: Day::WEEK.iter().map(|day| day.to_string()).collect(),
        slots: slots.iter().map(|slot| (*slot).to_string()).collect(),
        cells,
        timetable: entries,
    }
}

async fn get_class_schedule_wrapper(
    ctx: &mut TestContext,
    class_id: i32,
) -> Result<Json<ScheduleResponse>, AppError> {
    if ctx.class_repo.get_class_by_id(class_id).await?.is_none() {
        return Err(AppError(SchoolError::NotFound(format!(
            "Class with ID {class_id} not found"
        ))));
    }

    let rows = ctx.timetable_repo.list_for_class(class_id).await?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(render(entries, &CLASS_SLOTS)))
}

async fn get_teacher_schedule_wrapper(
    ctx: &mut TestContext,
    teacher_id: i32,
) -> Result<Json<ScheduleResponse>, AppError> {
    if ctx
        .teacher_repo
        .get_teacher_by_id(teacher_id)
        .await?
        .is_none()
    {
        return Err(AppError(SchoolError::NotFound(format!(
            "Teacher with ID {teacher_id} not found"
        ))));
    }

    let rows = ctx.timetable_repo.list_for_teacher(teacher_id).await?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(render(entries, &TEACHER_SLOTS)))
}

async fn save_class_schedule_wrapper(
    ctx: &mut TestContext,
    role: ActorRole,
    class_id: i32,
    request: SaveTimetableRequest,
) -> Result<Json<ScheduleResponse>, AppError> {
    role.require_admin()?;

    let form = ScheduleForm::from(request);
    form.validate()?;

    let end_time = end_of_period(&form.start_time).ok_or_else(|| {
        SchoolError::Validation(format!("Invalid start time: {}", form.start_time))
    })?;

    let (Some(subject_id), Some(teacher_id)) = (form.subject_id, form.teacher_id) else {
        return Err(AppError(SchoolError::Validation(
            "subject_id and teacher_id are required".to_string(),
        )));
    };

    // Static references for mockall
    let day: &'static str = Box::leak(form.day_of_week.clone().into_boxed_str());
    let start: &'static str = Box::leak(form.start_time.clone().into_boxed_str());
    let end: &'static str = Box::leak(end_time.into_boxed_str());

    ctx.timetable_repo
        .upsert_entry(class_id, day, start, end, subject_id, teacher_id)
        .await?;

    // Refresh in full, no optimistic patch
    let rows = ctx.timetable_repo.list_for_class(class_id).await?;
    let entries: Vec<TimetableEntry> = rows.into_iter().map(|row| row.into_entry()).collect();

    Ok(Json(render(entries, &CLASS_SLOTS)))
}

fn save_request(start_time: &str, subject_id: Option<i32>, teacher_id: Option<i32>) -> SaveTimetableRequest {
    SaveTimetableRequest {
        day_of_week: "Monday".to_string(),
        start_time: start_time.to_string(),
        subject_id,
        teacher_id,
    }
}

#[tokio::test]
async fn test_get_class_schedule_populates_grid() {
    let mut ctx = TestContext::new();

    ctx.class_repo
        .expect_get_class_by_id()
        .with(predicate::eq(1))
        .returning(|id| Ok(Some(db_class(id, "7A", 7))));
    ctx.timetable_repo
        .expect_list_for_class()
        .with(predicate::eq(1))
        .returning(|id| {
            Ok(vec![class_timetable_row(
                db_entry(10, id, "Monday", "09:00", 5, 2),
                "Math",
                "Jane",
                "Doe",
            )])
        });

    let Json(response) = get_class_schedule_wrapper(&mut ctx, 1).await.unwrap();

    assert_eq!(response.days.len(), 5);
    assert_eq!(response.slots.len(), CLASS_SLOTS.len());
    assert_eq!(response.cells.len(), 5 * CLASS_SLOTS.len());
    assert_eq!(response.timetable.len(), 1);

    let populated: Vec<_> = response
        .cells
        .iter()
        .filter(|cell| cell.entry.is_some())
        .collect();
    assert_eq!(populated.len(), 1);
    assert_eq!(populated[0].day, "Monday");
    assert_eq!(populated[0].slot, "09:00");

    let entry = populated[0].entry.as_ref().unwrap();
    assert_eq!(entry.subject.as_deref(), Some("Math"));
    assert_eq!(entry.teacher.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_get_class_schedule_unknown_class() {
    let mut ctx = TestContext::new();

    ctx.class_repo
        .expect_get_class_by_id()
        .returning(|_| Ok(None));

    let err = get_class_schedule_wrapper(&mut ctx, 99).await.unwrap_err();
    assert!(matches!(err.0, SchoolError::NotFound(_)));
}

#[tokio::test]
async fn test_get_teacher_schedule_resolves_class_name() {
    let mut ctx = TestContext::new();

    ctx.teacher_repo
        .expect_get_teacher_by_id()
        .with(predicate::eq(2))
        .returning(|id| Ok(Some(db_teacher(id, "Jane", "Doe"))));
    ctx.timetable_repo
        .expect_list_for_teacher()
        .with(predicate::eq(2))
        .returning(|_| {
            Ok(vec![DbTeacherTimetableRow {
                entry: db_entry(11, 1, "Friday", "08:00", 5, 2),
                subject_name: Some("Math".to_string()),
                class_name: Some("7A".to_string()),
            }])
        });

    let Json(response) = get_teacher_schedule_wrapper(&mut ctx, 2).await.unwrap();

    // The teacher grid has the earlier 08:00 row the class grid lacks.
    assert_eq!(response.slots.len(), TEACHER_SLOTS.len());
    let populated: Vec<_> = response
        .cells
        .iter()
        .filter(|cell| cell.entry.is_some())
        .collect();
    assert_eq!(populated.len(), 1);
    assert_eq!(populated[0].slot, "08:00");

    let entry = populated[0].entry.as_ref().unwrap();
    assert_eq!(entry.class_name.as_deref(), Some("7A"));
    assert_eq!(entry.teacher, None);
}

#[tokio::test]
async fn test_save_upserts_and_refreshes() {
    let mut ctx = TestContext::new();

    ctx.timetable_repo
        .expect_upsert_entry()
        .with(
            predicate::eq(1),
            predicate::eq("Monday"),
            predicate::eq("09:00"),
            predicate::eq("10:00"),
            predicate::eq(5),
            predicate::eq(2),
        )
        .times(1)
        .returning(|class_id, day, start, _, subject_id, teacher_id| {
            Ok(db_entry(42, class_id, day, start, subject_id, teacher_id))
        });
    ctx.timetable_repo
        .expect_list_for_class()
        .with(predicate::eq(1))
        .times(1)
        .returning(|id| {
            Ok(vec![class_timetable_row(
                db_entry(42, id, "Monday", "09:00", 5, 2),
                "Math",
                "Jane",
                "Doe",
            )])
        });

    let Json(response) =
        save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("09:00", Some(5), Some(2)))
            .await
            .unwrap();

    assert_eq!(response.timetable.len(), 1);
    assert_eq!(response.timetable[0].timetable_id, 42);
    assert_eq!(response.timetable[0].end_time, "10:00");
}

#[tokio::test]
async fn test_save_twice_same_key_keeps_one_entry() {
    let mut ctx = TestContext::new();

    // Simulates the conflict-target upsert: the second save lands on the
    // same row, so the surrogate id never changes and no second row
    // appears.
    let stored: Arc<Mutex<Option<(i32, i32)>>> = Arc::new(Mutex::new(None));

    let upsert_stored = stored.clone();
    ctx.timetable_repo
        .expect_upsert_entry()
        .times(2)
        .returning(move |class_id, day, start, _, subject_id, teacher_id| {
            *upsert_stored.lock().unwrap() = Some((subject_id, teacher_id));
            Ok(db_entry(42, class_id, day, start, subject_id, teacher_id))
        });

    let list_stored = stored.clone();
    ctx.timetable_repo
        .expect_list_for_class()
        .times(2)
        .returning(move |id| {
            let (subject_id, teacher_id) = list_stored.lock().unwrap().unwrap();
            Ok(vec![class_timetable_row(
                db_entry(42, id, "Monday", "09:00", subject_id, teacher_id),
                "Science",
                "Jane",
                "Doe",
            )])
        });

    save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("09:00", Some(5), Some(2)))
        .await
        .unwrap();
    let Json(response) =
        save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("09:00", Some(8), Some(2)))
            .await
            .unwrap();

    // Still one entry, same identity, second subject wins.
    assert_eq!(response.timetable.len(), 1);
    assert_eq!(response.timetable[0].timetable_id, 42);
    assert_eq!(response.timetable[0].subject_id, 8);
}

#[tokio::test]
async fn test_save_with_missing_subject_never_reaches_storage() {
    // No expectations are set on the timetable repo: any storage call
    // would panic the mock and fail the test.
    let mut ctx = TestContext::new();

    let err =
        save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("09:00", None, Some(2)))
            .await
            .unwrap_err();

    assert!(matches!(err.0, SchoolError::Validation(_)));
    assert!(err.0.to_string().contains("subject_id"));
}

#[tokio::test]
async fn test_save_with_unparseable_time_is_rejected() {
    let mut ctx = TestContext::new();

    let err =
        save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("noon!", Some(5), Some(2)))
            .await
            .unwrap_err();

    assert!(matches!(err.0, SchoolError::Validation(_)));
}

#[tokio::test]
async fn test_teacher_role_cannot_save() {
    let mut ctx = TestContext::new();

    let err = save_class_schedule_wrapper(
        &mut ctx,
        ActorRole::Teacher,
        1,
        save_request("09:00", Some(5), Some(2)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.0, SchoolError::Authorization(_)));
}

#[tokio::test]
async fn test_storage_error_surfaces_verbatim() {
    let mut ctx = TestContext::new();

    ctx.timetable_repo
        .expect_upsert_entry()
        .returning(|_, _, _, _, _, _| Err(eyre::eyre!("connection refused")));

    let err =
        save_class_schedule_wrapper(&mut ctx, ActorRole::Admin, 1, save_request("09:00", Some(5), Some(2)))
            .await
            .unwrap_err();

    assert!(matches!(err.0, SchoolError::Database(_)));
    assert!(err.0.to_string().contains("connection refused"));
}
