use campus_portal::core::{aggregate, metrics};
use campus_portal::{ApiClient, AttendanceFilter, PortalError, Settings};
use httpmock::prelude::*;

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        base_url: server.base_url(),
        token_path: ".portal-token".to_string(),
        timeout_seconds: 5,
    }
}

fn attendance_json(id: i64, student_id: i64, status: &str, student: &str, course: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "student_id": student_id,
        "course_id": 1,
        "date": "2025-03-10",
        "status": status,
        "student_name": student,
        "course_name": course
    })
}

#[tokio::test]
async fn aggregates_all_students_preserving_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/students/");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "age": 28},
            {"id": 2, "name": "Grace Hopper", "email": "grace@example.com", "age": 30}
        ]));
    });
    let first = server.mock(|when, then| {
        when.method(GET).path("/students/1/attendance");
        then.status(200).json_body(serde_json::json!([
            attendance_json(10, 1, "present", "Ada Lovelace", "Maths"),
            attendance_json(11, 1, "absent", "Ada Lovelace", "Maths"),
        ]));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/students/2/attendance");
        then.status(200).json_body(serde_json::json!([
            attendance_json(20, 2, "present", "Grace Hopper", "Maths"),
            attendance_json(21, 2, "present", "Grace Hopper", "Maths"),
            attendance_json(22, 2, "absent", "Grace Hopper", "Maths"),
        ]));
    });

    let client = ApiClient::new(&settings_for(&server)).with_token("sesame");
    let students = client.students().await.unwrap();
    let all = aggregate::attendance_for_students(&client, &students)
        .await
        .unwrap();

    first.assert();
    second.assert();

    assert_eq!(all.len(), 5);
    let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 11, 20, 21, 22]);

    let stats = metrics::attendance_stats(&all);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.present, 3);
    assert_eq!(stats.absent, 2);
    assert_eq!(stats.percentage, 60);
}

#[tokio::test]
async fn a_single_failed_fetch_aborts_the_aggregation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/students/");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "age": 28},
            {"id": 2, "name": "Grace Hopper", "email": "grace@example.com", "age": 30}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/students/1/attendance");
        then.status(200)
            .json_body(serde_json::json!([attendance_json(10, 1, "present", "Ada Lovelace", "Maths")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/students/2/attendance");
        then.status(500)
            .json_body(serde_json::json!({"detail": "database gone"}));
    });

    let client = ApiClient::new(&settings_for(&server)).with_token("sesame");
    let students = client.students().await.unwrap();
    let result = aggregate::attendance_for_students(&client, &students).await;

    match result {
        Err(PortalError::BackendError { status, detail }) => {
            assert_eq!(status, 500);
            assert_eq!(detail, "database gone");
        }
        other => panic!("expected BackendError, got {:?}", other),
    }
}

#[tokio::test]
async fn filters_narrow_the_aggregate_without_touching_stats() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/students/1/attendance");
        then.status(200).json_body(serde_json::json!([
            attendance_json(10, 1, "present", "Ada Lovelace", "Maths"),
            attendance_json(11, 1, "absent", "Ada Lovelace", "Physics"),
        ]));
    });

    let client = ApiClient::new(&settings_for(&server)).with_token("sesame");
    let records = client.student_attendance(1).await.unwrap();

    let stats = metrics::attendance_stats(&records);
    assert_eq!(stats.percentage, 50);

    let filter = AttendanceFilter {
        status: Some("present".to_string()),
        ..Default::default()
    };
    let visible = filter.apply(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 10);

    // filtering is a view concern; the aggregate and its stats are intact
    assert_eq!(records.len(), 2);
    assert_eq!(metrics::attendance_stats(&records), stats);
}
