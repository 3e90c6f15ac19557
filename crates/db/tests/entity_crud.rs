//! Integration tests for the repository layer.
//!
//! Each test gets a fresh SQLite database with the migrations applied:
//! - Create/list round trips
//! - Joined listings (interns with mentors, assignments with names)
//! - Unique and foreign key violations
//! - Update/delete of missing rows

use assert_matches::assert_matches;
use chrono::NaiveDate;
use slotwise_db::models::account::CreateAccount;
use slotwise_db::models::assignment::{CreateAssignment, UpdateAssignment};
use slotwise_db::models::intern::{CreateIntern, UpdateIntern};
use slotwise_db::models::mentor::{CreateMentor, UpdateMentor};
use slotwise_db::models::project::{CreateProject, UpdateProject};
use slotwise_db::repositories::{
    AccountRepo, AssignmentRepo, InternRepo, MentorRepo, ProjectRepo,
};
use slotwise_db::{is_foreign_key_violation, is_unique_violation};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_mentor(name: &str, email: &str) -> CreateMentor {
    CreateMentor {
        name: name.to_string(),
        email: email.to_string(),
        department: "AI".to_string(),
    }
}

fn new_intern(name: &str, email: &str, mentor_id: i64) -> CreateIntern {
    CreateIntern {
        name: name.to_string(),
        email: email.to_string(),
        mentor_id,
    }
}

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
    }
}

fn new_assignment(intern_id: i64, project_id: i64, remarks: &str) -> CreateAssignment {
    CreateAssignment {
        intern_id,
        project_id,
        remarks: remarks.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Mentors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_mentor_appears_in_list(pool: SqlitePool) {

    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    assert_eq!(mentor.id, 1);

    let mentors = MentorRepo::list(&pool).await.unwrap();
    assert_eq!(mentors.len(), 1);
    assert_eq!(mentors[0].name, "Asha");
    assert_eq!(mentors[0].email, "asha@x.com");
    assert_eq!(mentors[0].department, "AI");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_mentor_email_is_unique_violation(pool: SqlitePool) {
    MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();

    let err = MentorRepo::create(&pool, &new_mentor("Other", "asha@x.com"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err), "expected unique violation, got {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_mentor_replaces_row(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();

    let input = UpdateMentor {
        name: "Asha K".to_string(),
        email: "asha.k@x.com".to_string(),
        department: "Research".to_string(),
    };
    let updated = MentorRepo::update(&pool, mentor.id, &input)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.name, "Asha K");
    assert_eq!(updated.email, "asha.k@x.com");
    assert_eq!(updated.department, "Research");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_mentor_returns_none_and_changes_nothing(pool: SqlitePool) {
    MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();

    let input = UpdateMentor {
        name: "Ghost".to_string(),
        email: "ghost@x.com".to_string(),
        department: "None".to_string(),
    };
    let result = MentorRepo::update(&pool, 999, &input).await.unwrap();
    assert!(result.is_none());

    let mentors = MentorRepo::list(&pool).await.unwrap();
    assert_eq!(mentors.len(), 1);
    assert_eq!(mentors[0].name, "Asha");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_twice_reports_missing_second_time(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();

    assert!(MentorRepo::delete(&pool, mentor.id).await.unwrap());
    assert!(!MentorRepo::delete(&pool, mentor.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ids_are_not_reused_after_delete(pool: SqlitePool) {
    let first = MentorRepo::create(&pool, &new_mentor("A", "a@x.com"))
        .await
        .unwrap();
    MentorRepo::delete(&pool, first.id).await.unwrap();

    let second = MentorRepo::create(&pool, &new_mentor("B", "b@x.com"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Interns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_intern_list_includes_mentor_details(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();
    assert_eq!(intern.id, 1);
    assert_eq!(intern.status, "active");

    let interns = InternRepo::list_with_mentor(&pool).await.unwrap();
    assert_eq!(interns.len(), 1);
    assert_eq!(interns[0].name, "Ravi");
    assert_eq!(interns[0].mentor_id, mentor.id);
    assert_eq!(interns[0].mentor_name.as_deref(), Some("Asha"));
    assert_eq!(interns[0].mentor_email.as_deref(), Some("asha@x.com"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_intern_with_unknown_mentor_is_foreign_key_violation(pool: SqlitePool) {

    let err = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", 42))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err), "expected FK violation, got {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_mentor_with_interns_is_restricted(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();

    let err = MentorRepo::delete(&pool, mentor.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err), "expected FK violation, got {err:?}");

    let still_there = MentorRepo::find_by_id(&pool, mentor.id).await.unwrap();
    assert!(still_there.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_intern_without_status_resets_to_default(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();

    let completed = UpdateIntern {
        name: "Ravi".to_string(),
        email: "ravi@x.com".to_string(),
        mentor_id: mentor.id,
        status: Some("completed".to_string()),
    };
    let updated = InternRepo::update(&pool, intern.id, &completed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "completed");

    let reset = UpdateIntern {
        status: None,
        ..completed
    };
    let updated = InternRepo::update(&pool, intern.id, &reset)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "active");
}

// ---------------------------------------------------------------------------
// Projects and assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_project_defaults_and_dates_round_trip(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();

    assert_eq!(project.id, 1);
    assert_eq!(project.status, "ongoing");
    assert_eq!(project.description, None);
    assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2024, 6, 1));

    let input = UpdateProject {
        name: "P1".to_string(),
        description: Some("Search ranking".to_string()),
        status: Some("completed".to_string()),
        start_date: project.start_date,
        end_date: project.end_date,
    };
    let updated = ProjectRepo::update(&pool, project.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.description.as_deref(), Some("Search ranking"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assignment_list_starts_at_zero_progress(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();

    let assignment =
        AssignmentRepo::create(&pool, &new_assignment(intern.id, project.id, "kickoff"))
            .await
            .unwrap();
    assert_eq!(assignment.id, 1);

    let listed = AssignmentRepo::list_detailed(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].progress, 0);
    assert_eq!(listed[0].remarks, "kickoff");
    assert_eq!(listed[0].intern_name.as_deref(), Some("Ravi"));
    assert_eq!(listed[0].project_name.as_deref(), Some("P1"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_assignment_progress(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    let assignment =
        AssignmentRepo::create(&pool, &new_assignment(intern.id, project.id, "kickoff"))
            .await
            .unwrap();

    let input = UpdateAssignment {
        intern_id: intern.id,
        project_id: project.id,
        progress: 40,
        remarks: "halfway there".to_string(),
    };
    let updated = AssignmentRepo::update(&pool, assignment.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.progress, 40);
    assert_eq!(updated.remarks, "halfway there");

    assert!(AssignmentRepo::update(&pool, 999, &input).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_project_with_assignments_is_restricted(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    AssignmentRepo::create(&pool, &new_assignment(intern.id, project.id, "kickoff"))
        .await
        .unwrap();

    let err = ProjectRepo::delete(&pool, project.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err), "expected FK violation, got {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_intern_with_assignments_is_restricted(pool: SqlitePool) {
    let mentor = MentorRepo::create(&pool, &new_mentor("Asha", "asha@x.com"))
        .await
        .unwrap();
    let intern = InternRepo::create(&pool, &new_intern("Ravi", "ravi@x.com", mentor.id))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    AssignmentRepo::create(&pool, &new_assignment(intern.id, project.id, "kickoff"))
        .await
        .unwrap();

    let err = InternRepo::delete(&pool, intern.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err), "expected FK violation, got {err:?}");
    assert!(InternRepo::find_by_id(&pool, intern.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_account_lookup_and_uniqueness(pool: SqlitePool) {
    let input = CreateAccount {
        username: "admin".to_string(),
        email: "admin@x.com".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let account = AccountRepo::create(&pool, &input).await.unwrap();

    let by_email = AccountRepo::find_by_email(&pool, "admin@x.com").await.unwrap();
    assert_matches!(by_email, Some(found) if found.id == account.id);

    let by_username = AccountRepo::find_by_username(&pool, "admin").await.unwrap();
    assert_matches!(by_username, Some(found) if found.email == "admin@x.com");

    let duplicate = CreateAccount {
        username: "admin".to_string(),
        email: "other@x.com".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let err = AccountRepo::create(&pool, &duplicate).await.unwrap_err();
    assert!(is_unique_violation(&err));
    assert_eq!(AccountRepo::count(&pool).await.unwrap(), 1);
}
