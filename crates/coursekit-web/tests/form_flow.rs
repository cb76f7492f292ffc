//! End-to-end tests for the content authoring flow
//!
//! Drives the form controller against the in-memory content service double
//! and checks the submission contract: one network mutation per successful
//! pass, create vs update dispatch, busy-state rejection and draft retention
//! on failure.

use chrono::Utc;
use coursekit_core::{ContentRecord, ContentType};
use coursekit_web::form::{ContentForm, FormError, FormPhase};
use coursekit_web::service::MockContentService;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn existing_record(course_id: Uuid) -> ContentRecord {
    let now = Utc::now();
    ContentRecord {
        id: Uuid::new_v4(),
        course_id,
        title: "Old Title".to_string(),
        content_type: ContentType::Video,
        youtube_id: Some("oldvideo".to_string()),
        text: None,
        created_at: now,
        updated_at: now,
    }
}

fn filled_create_form(course_id: Uuid) -> ContentForm {
    let mut form = ContentForm::new(course_id, None);
    form.set_title("Intro");
    form.set_content_type(Some(ContentType::Video));
    form.set_youtube_id("abc123");
    form
}

#[tokio::test]
async fn create_flow_dispatches_one_create_and_navigates() {
    let course_id = Uuid::new_v4();
    let service = MockContentService::new();
    let mut form = filled_create_form(course_id);

    let outcome = form.submit(&service).await.expect("submit should succeed");

    assert_eq!(service.create_calls(), 1);
    assert_eq!(service.update_calls(), 0);

    let created = service.last_created().expect("one create payload");
    assert_eq!(created.course_id, course_id);
    assert_eq!(created.title, "Intro");
    assert_eq!(created.youtube_id.as_deref(), Some("abc123"));
    assert!(created.text.is_none());

    assert!(outcome.redirect.contains(&course_id.to_string()));
    assert_eq!(outcome.redirect, format!("/manager/courses/{course_id}"));
    assert_eq!(form.phase(), FormPhase::Succeeded);
}

#[tokio::test]
async fn edit_flow_dispatches_update_with_existing_id() {
    let course_id = Uuid::new_v4();
    let record = existing_record(course_id);
    let service = MockContentService::new();

    let mut form = ContentForm::new(course_id, Some(&record));
    form.set_title("New Title");

    form.submit(&service).await.expect("submit should succeed");

    assert_eq!(service.create_calls(), 0);
    assert_eq!(service.update_calls(), 1);

    let (updated_id, payload) = service.last_updated().expect("one update call");
    assert_eq!(updated_id, record.id);
    assert_eq!(payload.title, "New Title");
    assert_eq!(payload.youtube_id.as_deref(), Some("oldvideo"));
}

#[tokio::test]
async fn second_submit_while_in_flight_makes_no_network_call() {
    let service = MockContentService::new();
    let mut form = filled_create_form(Uuid::new_v4());

    // Holds the form in the in-flight state, as if the remote call were
    // still outstanding.
    let _payload = form.begin_submit().expect("first begin should pass");
    assert_eq!(form.phase(), FormPhase::Submitting);

    let second = form.submit(&service).await;
    assert!(matches!(second, Err(FormError::SubmissionInFlight)));
    assert_eq!(service.create_calls(), 0);
    assert_eq!(service.update_calls(), 0);
}

#[tokio::test]
async fn submit_after_success_is_rejected() {
    let service = MockContentService::new();
    let mut form = filled_create_form(Uuid::new_v4());

    form.submit(&service).await.expect("first submit succeeds");
    let second = form.submit(&service).await;

    assert!(matches!(second, Err(FormError::AlreadySucceeded)));
    assert_eq!(service.create_calls(), 1);
}

#[tokio::test]
async fn remote_failure_preserves_draft_for_retry() {
    let course_id = Uuid::new_v4();
    let failing = MockContentService::new().with_failure("backend down");
    let mut form = filled_create_form(course_id);
    let draft_before = form.draft().clone();

    let result = form.submit(&failing).await;
    assert!(matches!(result, Err(FormError::Remote(_))));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.draft(), &draft_before);

    // The operator retries without re-entering anything
    let recovered = MockContentService::new();
    let outcome = form.submit(&recovered).await.expect("retry should succeed");

    assert_eq!(recovered.create_calls(), 1);
    assert_eq!(outcome.record.title, "Intro");
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_service() {
    let service = MockContentService::new();
    let mut form = ContentForm::new(Uuid::new_v4(), None);
    form.set_title("Intro");
    form.set_content_type(Some(ContentType::Video));
    // youtube_id left empty

    let result = form.submit(&service).await;

    match result {
        Err(FormError::Invalid(errors)) => {
            assert!(errors.contains_key("youtubeId"));
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
    assert_eq!(service.create_calls(), 0);
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn seeding_from_a_fetched_record_is_idempotent() {
    let course_id = Uuid::new_v4();
    let record = existing_record(course_id);

    // A valid fetched record seeds a valid form with no edits
    let form = ContentForm::new(course_id, Some(&record));
    assert!(form.validate().is_ok());

    // A record that would not validate seeds a form that reports the same
    let mut broken = existing_record(course_id);
    broken.title = String::new();
    let form = ContentForm::new(course_id, Some(&broken));
    assert!(form.validate().is_err());
}

#[test]
fn flipping_type_back_and_forth_preserves_youtube_id() {
    let mut form = filled_create_form(Uuid::new_v4());

    form.set_content_type(Some(ContentType::Text));
    form.set_content_type(Some(ContentType::Video));

    assert_eq!(form.draft().youtube_id, "abc123");
    assert!(form.validate().is_ok());
}
