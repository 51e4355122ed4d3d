use crate::api::ApiClient;
use crate::config::{AdminCommand, Settings};
use crate::domain::model::{AdminCreate, LoginRequest, Role, Session};
use crate::domain::ports::TokenStore;
use crate::utils::error::Result;

pub async fn login(
    settings: &Settings,
    store: &dyn TokenStore,
    role: Role,
    username: String,
    password: String,
) -> Result<()> {
    let client = ApiClient::new(settings);
    let login = LoginRequest { username, password };

    let token = match role {
        Role::Admin => client.login_admin(&login).await?,
        Role::Student => client.login_student(&login).await?,
    };

    store.save(&Session {
        token: token.access_token,
        role,
    })?;

    tracing::info!("logged in (role: {:?})", role);
    println!("Logged in. Session stored.");
    Ok(())
}

pub fn logout(store: &dyn TokenStore) -> Result<()> {
    store.clear()?;
    println!("Session cleared.");
    Ok(())
}

/// Admin bootstrap; the backend accepts this without a token.
pub async fn run_admin(command: AdminCommand, settings: &Settings) -> Result<()> {
    match command {
        AdminCommand::Create { username, password } => {
            let client = ApiClient::new(settings);
            let admin = client
                .create_admin(&AdminCreate { username, password })
                .await?;
            println!("Created admin #{} ({})", admin.id, admin.username);
            Ok(())
        }
    }
}
