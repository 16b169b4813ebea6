/// Pitstop - account and provider credential administration
use clap::{Args, Parser, Subcommand};
use pitstop_accounts::{
    config::{AccountsConfig, LEGACY_DATA_FOLDER_ENV},
    state::{AppState, StoreBackend},
};
use pitstop_core::types::{
    CreateProviderCredential, CredentialId, ProviderCredential, UpdateProviderCredential, User,
    UserId,
};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pitstop")]
#[command(about = "Manage Pitstop user accounts and provider credentials", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep users in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    ListUsers,
    /// Create a new user
    AddUser {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long, env = "PITSTOP_PASSWORD")]
        password: String,
        /// Use this id instead of a generated one
        #[arg(long)]
        id: Option<String>,
    },
    /// Check an email and password
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PITSTOP_PASSWORD")]
        password: String,
    },
    /// Show a single user
    ShowUser {
        /// User id
        id: String,
    },
    /// Register a provider credential for a user
    AddCredential {
        /// User id
        user_id: String,
        /// Credential id
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: CredentialFields,
    },
    /// Replace a user's provider credential
    UpdateCredential {
        /// User id
        user_id: String,
        /// Id of the credential to replace
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: CredentialFields,
    },
}

#[derive(Args)]
struct CredentialFields {
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    api_token: Option<String>,
    #[arg(long)]
    full_name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitstop_accounts=info,pitstop_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AccountsConfig::load(cli.config.as_deref())?;
    let backend = if cli.ephemeral {
        StoreBackend::Memory
    } else {
        let legacy = std::env::var_os(LEGACY_DATA_FOLDER_ENV).map(PathBuf::from);
        StoreBackend::Json(config.users_file_path(legacy))
    };
    let state = AppState::bootstrap(config, backend).await?;

    run(&state, cli.command).await
}

async fn run(state: &AppState, command: Commands) -> anyhow::Result<()> {
    let users = &state.user_service;

    match command {
        Commands::ListUsers => {
            let all = users.list_users().await?;
            print_json(&json!(all.iter().map(user_json).collect::<Vec<_>>()));
        }
        Commands::AddUser {
            email,
            password,
            id,
        } => match users
            .create_user(id.map(UserId::new), &email, &password)
            .await?
        {
            Some(user) => print_json(&user_json(&user)),
            None => anyhow::bail!("account {} already exists", email.trim()),
        },
        Commands::Login { email, password } => match users.login(&email, &password).await? {
            Some(user) => print_json(&user_json(&user)),
            None => anyhow::bail!("invalid email or password"),
        },
        Commands::ShowUser { id } => match users.find_user(&UserId::new(id.as_str())).await? {
            Some(user) => print_json(&user_json(&user)),
            None => anyhow::bail!("user {} not found", id),
        },
        Commands::AddCredential {
            user_id,
            id,
            fields,
        } => {
            let user_id = UserId::new(user_id);
            users
                .create_provider_credential(
                    &user_id,
                    CreateProviderCredential {
                        id: id.map(CredentialId::new),
                        email: fields.email,
                        api_token: fields.api_token,
                        full_name: fields.full_name,
                    },
                )
                .await?;
            show_after_change(state, &user_id).await?;
        }
        Commands::UpdateCredential {
            user_id,
            id,
            fields,
        } => {
            let user_id = UserId::new(user_id);
            users
                .update_provider_credential(
                    &user_id,
                    Some(&CredentialId::new(id)),
                    UpdateProviderCredential {
                        email: fields.email,
                        api_token: fields.api_token,
                        full_name: fields.full_name,
                    },
                )
                .await?;
            show_after_change(state, &user_id).await?;
        }
    }

    Ok(())
}

/// Credential commands succeed silently for unknown users; report that here
async fn show_after_change(state: &AppState, user_id: &UserId) -> anyhow::Result<()> {
    match state.user_service.find_user(user_id).await? {
        Some(user) => print_json(&user_json(&user)),
        None => anyhow::bail!("user {} not found", user_id),
    }
    Ok(())
}

/// Printable user without the password hash or token values
fn user_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id,
        "email": user.email,
        "provider_credentials": user
            .provider_credentials
            .iter()
            .map(credential_json)
            .collect::<Vec<_>>(),
    })
}

fn credential_json(credential: &ProviderCredential) -> serde_json::Value {
    json!({
        "id": credential.id,
        "type": credential.provider,
        "email": credential.email,
        "full_name": credential.full_name,
        "has_token": credential.has_token(),
    })
}

#[allow(clippy::print_stdout)]
fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "failed to render output"),
    }
}
