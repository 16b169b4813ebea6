mod credential;
mod ids;
mod project;
mod user;

pub use credential::{
    CreateProviderCredential, ProviderCredential, ProviderKind, UpdateProviderCredential,
};
pub use ids::{CredentialId, ProjectId, UserId};
pub use project::{Build, BuildStatus, Project, ProjectSummary};
pub use user::{NewUser, User};
