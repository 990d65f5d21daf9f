mod common;

use services::FailureKind;

#[tokio::test]
async fn created_course_appears_on_dashboard() {
    let (services, api) = common::signed_in();
    let courses = services.courses();

    let course = courses.create_course("  Networks 101 ").await.expect("create");
    assert_eq!(course.title, "Networks 101");

    let dashboard = courses.load_dashboard(course.id).await.expect("dashboard");
    assert_eq!(dashboard.course, course);
    assert_eq!(dashboard.documents.len(), 1);
    assert_eq!(dashboard.documents[0].filename, "networks.pdf");
    assert_eq!(api.request_count(), 3);
}

#[tokio::test]
async fn blank_title_is_rejected_locally() {
    let (services, api) = common::signed_in();
    let err = services
        .courses()
        .create_course("   ")
        .await
        .expect_err("blank title");
    assert_eq!(err.kind(), FailureKind::Validation);
    assert_eq!(api.request_count(), 0);
}
