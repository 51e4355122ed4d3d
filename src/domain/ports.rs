use crate::domain::model::{Attendance, Session};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// Client-side persistence for the session obtained at login.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Seam between the aggregation layer and HTTP so the fan-out can be
/// exercised against an in-memory source in tests.
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    async fn attendance_for(&self, student_id: i64) -> Result<Vec<Attendance>>;
}
