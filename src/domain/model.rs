use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// All entities are owned by the backend; the client treats them as
// immutable value records fetched per command and discarded afterwards.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Grade link record. `student_name` and `course_name` are denormalised
/// by the server so listings need no extra lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub grade: String,
    pub student_name: String,
    pub course_name: String,
}

/// Attendance link record. `status` is a plain string compared
/// case-sensitively; the backend only ever emits "present" or "absent".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: String,
    pub student_name: String,
    pub course_name: String,
}

pub const STATUS_PRESENT: &str = "present";
pub const STATUS_ABSENT: &str = "absent";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeCreate {
    pub student_id: i64,
    pub course_id: i64,
    pub grade: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

/// Stored client-side after login; the role picks the dashboard variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_deserialises_iso_dates() {
        let json = r#"{
            "id": 7,
            "student_id": 1,
            "course_id": 2,
            "date": "2025-03-14",
            "status": "present",
            "student_name": "Ada",
            "course_name": "Maths"
        }"#;
        let record: Attendance = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(record.status, STATUS_PRESENT);
    }

    #[test]
    fn student_phone_is_optional() {
        let json = r#"{"id": 1, "name": "Ada", "email": "ada@example.com", "age": 21}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.phone.is_none());

        let out = serde_json::to_value(&student).unwrap();
        assert!(out.get("phone").is_none());
    }

    #[test]
    fn session_round_trips() {
        let session = Session {
            token: "t0k3n".to_string(),
            role: Role::Admin,
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, Role::Admin);
        assert_eq!(back.token, "t0k3n");
    }
}
