pub mod aggregate;
pub mod filter;
pub mod metrics;

pub use crate::domain::model::{Attendance, Course, Grade, Student};
pub use crate::domain::ports::{AttendanceSource, ConfigProvider, TokenStore};
pub use crate::utils::error::Result;
pub use crate::core::filter::AttendanceFilter;
pub use crate::core::metrics::AttendanceStats;
