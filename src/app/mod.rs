// App layer: one module per command family. Fetch via the API client,
// derive via core, print plain-text tables. View state is rebuilt
// wholesale on every command; nothing is cached between runs.

pub mod attendance;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod grades;
pub mod students;

use crate::api::ApiClient;
use crate::config::store::FileTokenStore;
use crate::config::{Command, MyCommand, Settings};
use crate::domain::model::Session;
use crate::domain::ports::TokenStore;
use crate::utils::error::{PortalError, Result};

pub async fn run(command: Command, settings: &Settings) -> Result<()> {
    let store = FileTokenStore::new(&settings.token_path);

    match command {
        Command::Login {
            role,
            username,
            password,
        } => auth::login(settings, &store, role, username, password).await,
        Command::Logout => auth::logout(&store),
        Command::Admin { command } => auth::run_admin(command, settings).await,
        Command::Students { command } => students::run(command, &client(settings, &store)?).await,
        Command::Courses { command } => courses::run(command, &client(settings, &store)?).await,
        Command::Enroll { student, course } => {
            courses::enroll(&client(settings, &store)?, student, course).await
        }
        Command::Grades { command } => grades::run(command, &client(settings, &store)?).await,
        Command::Attendance { command } => {
            attendance::run(command, &client(settings, &store)?).await
        }
        Command::My { command } => match command {
            MyCommand::Grades => grades::mine(&client(settings, &store)?).await,
            MyCommand::Attendance => attendance::mine(&client(settings, &store)?).await,
        },
        Command::Dashboard => dashboard::run(settings, &store).await,
    }
}

pub(crate) fn session(store: &dyn TokenStore) -> Result<Session> {
    store.load()?.ok_or_else(|| PortalError::AuthError {
        message: "no stored session; run 'campus-portal login' first".to_string(),
    })
}

fn client(settings: &Settings, store: &dyn TokenStore) -> Result<ApiClient> {
    let session = session(store)?;
    Ok(ApiClient::new(settings).with_token(session.token))
}
