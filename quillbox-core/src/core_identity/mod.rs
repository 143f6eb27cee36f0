/*
    core_identity - Credentials and the current session

    Registered users, signup/login/logout, and the single per-process
    session, persisted through the same port as the content state.
*/

pub mod errors;
pub mod session;
pub mod store;
pub mod user;

pub use errors::{IdentityError, IdentityResult};
pub use session::Session;
pub use store::CredentialStore;
pub use user::UserRecord;
