use crate::api::ApiClient;
use crate::config::GradeCommand;
use crate::core::metrics;
use crate::domain::model::{Grade, GradeCreate};
use crate::utils::error::Result;

pub async fn run(command: GradeCommand, client: &ApiClient) -> Result<()> {
    match command {
        GradeCommand::Assign {
            student,
            course,
            grade,
        } => {
            let assigned = client
                .assign_grade(&GradeCreate {
                    student_id: student,
                    course_id: course,
                    grade,
                })
                .await?;
            println!(
                "Assigned {} to {} for {}",
                assigned.grade, assigned.student_name, assigned.course_name
            );
            Ok(())
        }
        GradeCommand::List { student } => {
            let records = client.student_grades(student).await?;
            render_grades(&records);
            Ok(())
        }
    }
}

pub async fn mine(client: &ApiClient) -> Result<()> {
    let records = client.my_grades().await?;
    render_grades(&records);
    Ok(())
}

pub(crate) fn render_grades(records: &[Grade]) {
    println!("{:<6} {:<24} {:<28} {:<6}", "ID", "STUDENT", "COURSE", "GRADE");
    for g in records {
        println!(
            "{:<6} {:<24} {:<28} {:<6}",
            g.id, g.student_name, g.course_name, g.grade
        );
    }
    println!(
        "{} grade(s), GPA {}",
        records.len(),
        metrics::format_gpa(metrics::gpa(records))
    );
}
