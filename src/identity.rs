use crate::error::ClassroomError;
use crate::logger;
use crate::models::{Role, User};
use crate::store::ClassroomStore;

/// Registers a new user. Students also get a zeroed score record.
///
/// Usernames are not checked for uniqueness.
pub fn register(
    store: &mut ClassroomStore,
    username: &str,
    password: &str,
    role: Role,
) -> Result<(), ClassroomError> {
    if username.is_empty() || password.is_empty() {
        logger::log(&format!("Rejected {} registration with empty credentials", role));
        return Err(ClassroomError::EmptyCredentials);
    }

    store.add_user(User::new(username, password, role));
    match role {
        Role::Student => store.reset_score(username),
        Role::Teacher => {}
    }

    logger::log(&format!("Registered {} {}", role, username));
    Ok(())
}

/// Returns the first user whose role, username and password all match.
pub fn authenticate<'a>(
    store: &'a ClassroomStore,
    role: Role,
    username: &str,
    password: &str,
) -> Result<&'a User, ClassroomError> {
    match store
        .users()
        .iter()
        .find(|user| user.matches(role, username, password))
    {
        Some(user) => {
            logger::log(&format!("{} {} logged in", role.title(), username));
            Ok(user)
        }
        None => {
            logger::log(&format!("Failed {} login for {}", role, username));
            Err(ClassroomError::AuthenticationFailed(role))
        }
    }
}
