use crate::domain::model::{
    Admin, AdminCreate, Attendance, AttendanceCreate, Course, CourseCreate, EnrollRequest, Grade,
    GradeCreate, LoginRequest, Student, StudentCreate, TokenResponse,
};
use crate::domain::ports::{AttendanceSource, ConfigProvider};
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin authenticated wrapper over the student-management REST backend.
///
/// One typed method per endpoint; every call returns parsed JSON or a
/// typed error. When a bearer token is set it is attached to every
/// request. No retries, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    timeout: Duration,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &dyn ConfigProvider) -> Self {
        Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(config.timeout_seconds()),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.timeout(self.timeout);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        // FastAPI-style error bodies carry the message under "detail".
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("detail").map(|d| match d {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            })
            .unwrap_or(body);

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(PortalError::AuthError { message: detail });
        }
        Err(PortalError::BackendError {
            status: status.as_u16(),
            detail,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        let response = self.prepare(self.client.get(self.url(path))).send().await?;
        self.parse(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("POST {}", path);
        let response = self
            .prepare(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        self.parse(response).await
    }

    /// POST without the bearer token. Login must always go out bare,
    /// even when the client still holds a stale token.
    async fn post_json_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("POST {} (unauthenticated)", path);
        let response = self
            .client
            .post(self.url(path))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        self.parse(response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("PUT {}", path);
        let response = self
            .prepare(self.client.put(self.url(path)))
            .json(body)
            .send()
            .await?;
        self.parse(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("DELETE {}", path);
        let response = self
            .prepare(self.client.delete(self.url(path)))
            .send()
            .await?;
        self.parse(response).await
    }

    fn detail_of(value: serde_json::Value) -> String {
        value
            .get("detail")
            .and_then(|d| d.as_str())
            .unwrap_or_default()
            .to_string()
    }

    // --- auth ---

    pub async fn login_admin(&self, login: &LoginRequest) -> Result<TokenResponse> {
        self.post_json_public("/admin/login", login).await
    }

    pub async fn login_student(&self, login: &LoginRequest) -> Result<TokenResponse> {
        self.post_json_public("/student/login", login).await
    }

    pub async fn create_admin(&self, admin: &AdminCreate) -> Result<Admin> {
        self.post_json("/admin/create", admin).await
    }

    // --- students ---

    pub async fn students(&self) -> Result<Vec<Student>> {
        self.get_json("/students/").await
    }

    pub async fn student(&self, id: i64) -> Result<Student> {
        self.get_json(&format!("/students/{}", id)).await
    }

    pub async fn create_student(&self, student: &StudentCreate) -> Result<Student> {
        self.post_json("/students/", student).await
    }

    pub async fn update_student(&self, id: i64, student: &StudentCreate) -> Result<Student> {
        self.put_json(&format!("/students/{}", id), student).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<String> {
        let value: serde_json::Value = self.delete_json(&format!("/students/{}", id)).await?;
        Ok(Self::detail_of(value))
    }

    pub async fn student_courses(&self, id: i64) -> Result<Vec<Course>> {
        self.get_json(&format!("/students/{}/courses", id)).await
    }

    pub async fn student_grades(&self, id: i64) -> Result<Vec<Grade>> {
        self.get_json(&format!("/students/{}/grades", id)).await
    }

    pub async fn student_attendance(&self, id: i64) -> Result<Vec<Attendance>> {
        self.get_json(&format!("/students/{}/attendance", id)).await
    }

    // --- student role ("me") ---

    pub async fn my_grades(&self) -> Result<Vec<Grade>> {
        self.get_json("/me/grades").await
    }

    pub async fn my_attendance(&self) -> Result<Vec<Attendance>> {
        self.get_json("/me/attendance").await
    }

    // --- courses / enrollment ---

    pub async fn courses(&self) -> Result<Vec<Course>> {
        self.get_json("/courses/").await
    }

    pub async fn create_course(&self, course: &CourseCreate) -> Result<Course> {
        self.post_json("/courses/", course).await
    }

    pub async fn enroll(&self, enrollment: &EnrollRequest) -> Result<String> {
        let value: serde_json::Value = self.post_json("/enroll/", enrollment).await?;
        Ok(Self::detail_of(value))
    }

    // --- grades / attendance ---

    pub async fn assign_grade(&self, grade: &GradeCreate) -> Result<Grade> {
        self.post_json("/grades/", grade).await
    }

    pub async fn mark_attendance(&self, attendance: &AttendanceCreate) -> Result<Attendance> {
        self.post_json("/attendance/", attendance).await
    }

    pub async fn attendance(&self) -> Result<Vec<Attendance>> {
        self.get_json("/attendance/").await
    }
}

#[async_trait]
impl AttendanceSource for ApiClient {
    async fn attendance_for(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.student_attendance(student_id).await
    }
}
