use study_core::model::{Concept, Course, CourseId, Language, MediaKind, UserId};
use study_core::time::fixed_now;

use super::test_harness::{StubApi, ViewKind, document, setup_view_harness};

fn course(id: u64, title: &str) -> Course {
    Course {
        id: CourseId::new(id),
        title: title.into(),
        created_at: fixed_now(),
        owner_id: UserId::new(1),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_lists_courses() {
    let api = StubApi::default();
    api.courses.lock().unwrap().push(course(1, "Networks 101"));
    let mut harness = setup_view_harness(ViewKind::Courses, Language::En, api);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("My Courses"), "missing heading in {html}");
    assert!(html.contains("Networks 101"), "missing course in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Courses, Language::En, StubApi::default());

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No courses created yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_arabic_labels() {
    let mut harness = setup_view_harness(ViewKind::Login, Language::Ar, StubApi::default());

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("البريد الإلكتروني"), "missing email label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_lists_course_documents() {
    let api = StubApi::default();
    api.courses.lock().unwrap().push(course(1, "Networks 101"));
    api.documents
        .lock()
        .unwrap()
        .push(document(7, MediaKind::Pdf));
    let mut harness = setup_view_harness(ViewKind::Dashboard(1), Language::En, api);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Networks 101"), "missing title in {html}");
    assert!(html.contains("lecture.pdf"), "missing document in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn document_view_smoke_renders_summary_markdown() {
    let api = StubApi::default();
    let mut doc = document(7, MediaKind::Pdf);
    doc.summary = Some("**Routing** moves packets.".into());
    doc.key_concepts = Some(vec![Concept {
        term: "Router".into(),
        definition: "Forwards packets".into(),
    }]);
    api.documents.lock().unwrap().push(doc);
    let mut harness = setup_view_harness(ViewKind::Document(7), Language::En, api);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("<strong>Routing</strong>"), "missing summary in {html}");
    assert!(html.contains("AI Summary"), "missing tab in {html}");
    assert!(!html.contains("Analyze Document"), "analysed document offers analysis: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn document_view_smoke_offers_transcript_for_audio() {
    let api = StubApi::default();
    api.documents
        .lock()
        .unwrap()
        .push(document(8, MediaKind::Audio));
    let mut harness = setup_view_harness(ViewKind::Document(8), Language::En, api);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Transcript"), "missing transcript tab in {html}");
    assert!(html.contains("Analyze Document"), "missing analyze action in {html}");
    assert!(html.contains("<audio"), "missing player in {html}");
    assert_eq!(harness.api.documents.lock().unwrap().len(), 1);
}
