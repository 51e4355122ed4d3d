use crate::api::ApiClient;
use crate::app::{attendance, courses, grades};
use crate::config::StudentCommand;
use crate::domain::model::{Student, StudentCreate};
use crate::utils::error::Result;

pub async fn run(command: StudentCommand, client: &ApiClient) -> Result<()> {
    match command {
        StudentCommand::List => {
            let students = client.students().await?;
            render_students(&students);
            Ok(())
        }
        StudentCommand::Show { id } => {
            let student = client.student(id).await?;
            render_students(std::slice::from_ref(&student));
            Ok(())
        }
        StudentCommand::Create {
            name,
            email,
            age,
            phone,
            password,
        } => {
            let created = client
                .create_student(&StudentCreate {
                    name,
                    email,
                    age,
                    phone,
                    password,
                })
                .await?;
            println!("Created student #{} ({})", created.id, created.name);
            Ok(())
        }
        StudentCommand::Update {
            id,
            name,
            email,
            age,
            phone,
            password,
        } => {
            let updated = client
                .update_student(
                    id,
                    &StudentCreate {
                        name,
                        email,
                        age,
                        phone,
                        password,
                    },
                )
                .await?;
            println!("Updated student #{} ({})", updated.id, updated.name);
            Ok(())
        }
        StudentCommand::Delete { id } => {
            let detail = client.delete_student(id).await?;
            println!("{}", detail);
            Ok(())
        }
        StudentCommand::Courses { id } => {
            let enrolled = client.student_courses(id).await?;
            courses::render_courses(&enrolled);
            Ok(())
        }
        StudentCommand::Grades { id } => {
            let records = client.student_grades(id).await?;
            grades::render_grades(&records);
            Ok(())
        }
        StudentCommand::Attendance { id } => {
            let records = client.student_attendance(id).await?;
            attendance::render_with_stats(&records);
            Ok(())
        }
    }
}

fn render_students(students: &[Student]) {
    println!(
        "{:<6} {:<24} {:<30} {:<5} {:<16}",
        "ID", "NAME", "EMAIL", "AGE", "PHONE"
    );
    for s in students {
        println!(
            "{:<6} {:<24} {:<30} {:<5} {:<16}",
            s.id,
            s.name,
            s.email,
            s.age,
            s.phone.as_deref().unwrap_or("-")
        );
    }
    println!("{} student(s)", students.len());
}
