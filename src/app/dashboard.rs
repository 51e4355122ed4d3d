use crate::api::ApiClient;
use crate::app::session;
use crate::config::Settings;
use crate::core::metrics;
use crate::domain::model::Role;
use crate::domain::ports::TokenStore;
use crate::utils::error::Result;

/// Role-dependent summary: admins see portal-wide counts, students see
/// their own derived metrics. Both variants issue their two fetches
/// concurrently and join all-or-nothing.
pub async fn run(settings: &Settings, store: &dyn TokenStore) -> Result<()> {
    let session = session(store)?;
    let client = ApiClient::new(settings).with_token(session.token.clone());

    match session.role {
        Role::Admin => {
            let (students, courses) = tokio::try_join!(client.students(), client.courses())?;
            println!("Admin dashboard");
            println!("  Students: {}", students.len());
            println!("  Courses:  {}", courses.len());
        }
        Role::Student => {
            let (grades, attendance) = tokio::try_join!(client.my_grades(), client.my_attendance())?;
            let stats = metrics::attendance_stats(&attendance);
            println!("Student dashboard");
            println!(
                "  GPA: {} ({} grade(s))",
                metrics::format_gpa(metrics::gpa(&grades)),
                grades.len()
            );
            println!(
                "  Attendance: {}% ({} present / {} total)",
                stats.percentage, stats.present, stats.total
            );
        }
    }
    Ok(())
}
