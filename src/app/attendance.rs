use crate::api::ApiClient;
use crate::config::AttendanceCommand;
use crate::core::{aggregate, metrics, AttendanceFilter, AttendanceStats};
use crate::domain::model::{Attendance, AttendanceCreate};
use crate::utils::error::Result;
use chrono::Local;

pub async fn run(command: AttendanceCommand, client: &ApiClient) -> Result<()> {
    match command {
        AttendanceCommand::Mark {
            student,
            course,
            date,
            status,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let marked = client
                .mark_attendance(&AttendanceCreate {
                    student_id: student,
                    course_id: course,
                    date,
                    status: status.as_str().to_string(),
                })
                .await?;
            println!(
                "Marked {} {} for {} on {}",
                marked.student_name, marked.status, marked.course_name, marked.date
            );
            Ok(())
        }
        AttendanceCommand::List => {
            let records = client.attendance().await?;
            render_attendance(&records);
            Ok(())
        }
        AttendanceCommand::Overview {
            search,
            status,
            student,
            course,
        } => {
            let filter = AttendanceFilter {
                search,
                status,
                student_id: student,
                course_id: course,
            };
            overview(client, &filter).await
        }
    }
}

/// Admin overview: student and course lists are fetched concurrently,
/// then every student's attendance is aggregated. Stats cover the whole
/// aggregate; the filter only narrows the printed table.
async fn overview(client: &ApiClient, filter: &AttendanceFilter) -> Result<()> {
    let (students, courses) = tokio::try_join!(client.students(), client.courses())?;
    tracing::info!(
        "overview across {} students and {} courses",
        students.len(),
        courses.len()
    );

    let all = aggregate::attendance_for_students(client, &students).await?;
    let stats = metrics::attendance_stats(&all);
    let visible = filter.apply(&all);

    println!(
        "{} student(s), {} course(s) tracked",
        students.len(),
        courses.len()
    );
    render_stats(&stats);
    println!();
    render_attendance(&visible);
    if visible.len() != all.len() {
        println!("({} of {} records match the filter)", visible.len(), all.len());
    }
    Ok(())
}

pub async fn mine(client: &ApiClient) -> Result<()> {
    let records = client.my_attendance().await?;
    render_with_stats(&records);
    Ok(())
}

pub(crate) fn render_with_stats(records: &[Attendance]) {
    render_attendance(records);
    render_stats(&metrics::attendance_stats(records));
}

pub(crate) fn render_attendance(records: &[Attendance]) {
    println!(
        "{:<6} {:<24} {:<28} {:<12} {:<8}",
        "ID", "STUDENT", "COURSE", "DATE", "STATUS"
    );
    for r in records {
        println!(
            "{:<6} {:<24} {:<28} {:<12} {:<8}",
            r.id, r.student_name, r.course_name, r.date, r.status
        );
    }
}

fn render_stats(stats: &AttendanceStats) {
    println!(
        "Total: {}  Present: {}  Absent: {}  Rate: {}%",
        stats.total, stats.present, stats.absent, stats.percentage
    );
}
