use crate::domain::model::{Attendance, Student};
use crate::domain::ports::AttendanceSource;
use crate::utils::error::{PortalError, Result};

/// Fetch every student's attendance and flatten into one sequence.
///
/// Fetches run concurrently but the result is ordered by student fetch
/// order, then by server-returned order per student. The join is
/// all-or-nothing: the first failed fetch fails the whole aggregation
/// and no partial result is returned.
pub async fn attendance_for_students<S>(source: &S, students: &[Student]) -> Result<Vec<Attendance>>
where
    S: AttendanceSource + Clone + Send + Sync + 'static,
{
    let handles: Vec<_> = students
        .iter()
        .map(|student| {
            let source = source.clone();
            let student_id = student.id;
            tokio::spawn(async move { source.attendance_for(student_id).await })
        })
        .collect();

    let mut records = Vec::new();
    for handle in handles {
        let fetched = handle.await.map_err(|e| PortalError::ProcessingError {
            message: format!("attendance fetch task failed: {}", e),
        })??;
        records.extend(fetched);
    }

    tracing::debug!(
        "aggregated {} attendance records across {} students",
        records.len(),
        students.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct InMemorySource {
        records: HashMap<i64, Vec<Attendance>>,
        failing: Vec<i64>,
    }

    #[async_trait]
    impl AttendanceSource for InMemorySource {
        async fn attendance_for(&self, student_id: i64) -> Result<Vec<Attendance>> {
            if self.failing.contains(&student_id) {
                return Err(PortalError::BackendError {
                    status: 500,
                    detail: format!("boom for student {}", student_id),
                });
            }
            Ok(self.records.get(&student_id).cloned().unwrap_or_default())
        }
    }

    fn student(id: i64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: 20,
            phone: None,
        }
    }

    fn record(id: i64, student_id: i64, status: &str) -> Attendance {
        Attendance {
            id,
            student_id,
            course_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            status: status.to_string(),
            student_name: format!("Student {}", student_id),
            course_name: "Maths".to_string(),
        }
    }

    #[tokio::test]
    async fn flattens_in_student_order_then_server_order() {
        let mut records = HashMap::new();
        records.insert(1, vec![record(10, 1, "present"), record(11, 1, "absent")]);
        records.insert(
            2,
            vec![
                record(20, 2, "present"),
                record(21, 2, "present"),
                record(22, 2, "absent"),
            ],
        );
        let source = InMemorySource {
            records,
            failing: vec![],
        };
        let students = vec![student(1, "Ada"), student(2, "Grace")];

        let all = attendance_for_students(&source, &students).await.unwrap();

        assert_eq!(all.len(), 5);
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 20, 21, 22]);
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_aggregation() {
        let mut records = HashMap::new();
        records.insert(1, vec![record(10, 1, "present")]);
        records.insert(3, vec![record(30, 3, "present")]);
        let source = InMemorySource {
            records,
            failing: vec![2],
        };
        let students = vec![student(1, "Ada"), student(2, "Grace"), student(3, "Edsger")];

        let result = attendance_for_students(&source, &students).await;

        assert!(matches!(
            result,
            Err(PortalError::BackendError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn empty_student_list_yields_empty_sequence() {
        let source = InMemorySource::default();
        let all = attendance_for_students(&source, &[]).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn students_without_records_contribute_nothing() {
        let mut records = HashMap::new();
        records.insert(2, vec![record(20, 2, "absent")]);
        let source = InMemorySource {
            records,
            failing: vec![],
        };
        let students = vec![student(1, "Ada"), student(2, "Grace")];

        let all = attendance_for_students(&source, &students).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 20);
    }
}
