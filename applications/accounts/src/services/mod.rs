/// Account services
pub mod credentials;
pub mod users;

pub use users::UserService;
