use crate::api::ApiClient;
use crate::config::CourseCommand;
use crate::domain::model::{Course, CourseCreate, EnrollRequest};
use crate::utils::error::Result;

pub async fn run(command: CourseCommand, client: &ApiClient) -> Result<()> {
    match command {
        CourseCommand::List => {
            let courses = client.courses().await?;
            render_courses(&courses);
            Ok(())
        }
        CourseCommand::Create { name, description } => {
            let created = client.create_course(&CourseCreate { name, description }).await?;
            println!("Created course #{} ({})", created.id, created.name);
            Ok(())
        }
    }
}

pub async fn enroll(client: &ApiClient, student_id: i64, course_id: i64) -> Result<()> {
    let detail = client
        .enroll(&EnrollRequest {
            student_id,
            course_id,
        })
        .await?;
    println!("{}", detail);
    Ok(())
}

pub(crate) fn render_courses(courses: &[Course]) {
    println!("{:<6} {:<28} DESCRIPTION", "ID", "NAME");
    for c in courses {
        println!("{:<6} {:<28} {}", c.id, c.name, c.description);
    }
    println!("{} course(s)", courses.len());
}
