pub mod file;
pub mod store;

use crate::domain::model::{Role, STATUS_ABSENT, STATUS_PRESENT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use crate::config::file::FileConfig;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOKEN_FILE: &str = ".portal-token";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "campus-portal")]
#[command(about = "Command-line portal for the student management backend")]
pub struct CliConfig {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Optional TOML config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Where the login session is stored
    #[arg(long, global = true)]
    pub token_file: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit JSON log lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the bearer token for subsequent commands
    Login {
        #[arg(long, value_enum)]
        role: Role,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Admin account management
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Manage students
    Students {
        #[command(subcommand)]
        command: StudentCommand,
    },
    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: CourseCommand,
    },
    /// Enroll a student in a course
    Enroll {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
    },
    /// Assign and list grades
    Grades {
        #[command(subcommand)]
        command: GradeCommand,
    },
    /// Mark and inspect attendance
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommand,
    },
    /// Records of the logged-in student
    My {
        #[command(subcommand)]
        command: MyCommand,
    },
    /// Role-dependent summary (admin counts or student metrics)
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an admin account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    List,
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        password: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        password: String,
    },
    Delete {
        id: i64,
    },
    /// Courses the student is enrolled in
    Courses {
        id: i64,
    },
    /// Grades of one student, with GPA
    Grades {
        id: i64,
    },
    /// Attendance of one student, with stats
    Attendance {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum GradeCommand {
    /// Assign a letter grade to a student for a course
    Assign {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
        #[arg(long)]
        grade: String,
    },
    /// List one student's grades
    List {
        #[arg(long)]
        student: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum AttendanceCommand {
    /// Mark a student present or absent (date defaults to today)
    Mark {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum)]
        status: MarkStatus,
    },
    /// All attendance records as the backend returns them
    List,
    /// Aggregate every student's attendance, with stats and filters
    Overview {
        #[arg(long)]
        search: Option<String>,
        /// Exact status match; omit for all
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        student: Option<i64>,
        #[arg(long)]
        course: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MyCommand {
    /// My grades and GPA
    Grades,
    /// My attendance and rate
    Attendance,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MarkStatus {
    Present,
    Absent,
}

impl MarkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkStatus::Present => STATUS_PRESENT,
            MarkStatus::Absent => STATUS_ABSENT,
        }
    }
}

/// Resolved configuration: flags win over the config file, the file wins
/// over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub token_path: String,
    pub timeout_seconds: u64,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::merge(cli, file.as_ref()))
    }

    fn merge(cli: &CliConfig, file: Option<&FileConfig>) -> Self {
        let backend = file.and_then(|f| f.backend.as_ref());
        let session = file.and_then(|f| f.session.as_ref());

        Settings {
            base_url: cli
                .base_url
                .clone()
                .or_else(|| backend.and_then(|b| b.base_url.clone()))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token_path: cli
                .token_file
                .clone()
                .or_else(|| session.and_then(|s| s.token_file.clone()))
                .unwrap_or_else(|| DEFAULT_TOKEN_FILE.to_string()),
            timeout_seconds: cli
                .timeout_seconds
                .or_else(|| backend.and_then(|b| b.timeout_seconds))
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token_path(&self) -> &str {
        &self.token_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("token_file", &self.token_path)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
