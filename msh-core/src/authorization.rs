//! The role gate that protects the administrative views and operations.

use crate::entities::*;

pub const ADMIN_ROLES: &[Role] = &[Role::Admin, Role::SuperAdmin];

/// Required to edit the roles of other users.
pub const SUPER_ADMIN_ROLES: &[Role] = &[Role::SuperAdmin];

pub fn can_access(role: Option<Role>, required: &[Role]) -> bool {
    role.is_some_and(|role| required.contains(&role))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    SignedOut,
    SignedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    Missing,
    Loaded(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    RedirectToLogin,
    RedirectToHome,
    Render,
}

pub fn decide_access(auth: AuthState, profile: ProfileState, required: &[Role]) -> AccessDecision {
    match (auth, profile) {
        (AuthState::Loading, _) => AccessDecision::Loading,
        (AuthState::SignedOut, _) => AccessDecision::RedirectToLogin,
        (AuthState::SignedIn, ProfileState::Loading) => AccessDecision::Loading,
        (AuthState::SignedIn, ProfileState::Missing) => AccessDecision::RedirectToHome,
        (AuthState::SignedIn, ProfileState::Loaded(role)) => {
            if can_access(Some(role), required) {
                AccessDecision::Render
            } else {
                AccessDecision::RedirectToHome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_by_role() {
        assert!(can_access(Some(Role::Admin), ADMIN_ROLES));
        assert!(can_access(Some(Role::SuperAdmin), ADMIN_ROLES));
        assert!(!can_access(Some(Role::User), ADMIN_ROLES));
        assert!(!can_access(None, ADMIN_ROLES));
        assert!(!can_access(Some(Role::Admin), SUPER_ADMIN_ROLES));
        assert!(can_access(Some(Role::SuperAdmin), SUPER_ADMIN_ROLES));
        assert!(!can_access(Some(Role::SuperAdmin), &[]));
    }

    #[test]
    fn render_for_admins() {
        for role in [Role::Admin, Role::SuperAdmin] {
            assert_eq!(
                decide_access(AuthState::SignedIn, ProfileState::Loaded(role), ADMIN_ROLES),
                AccessDecision::Render
            );
        }
    }

    #[test]
    fn redirect_users_home() {
        assert_eq!(
            decide_access(
                AuthState::SignedIn,
                ProfileState::Loaded(Role::User),
                ADMIN_ROLES
            ),
            AccessDecision::RedirectToHome
        );
        assert_eq!(
            decide_access(AuthState::SignedIn, ProfileState::Missing, ADMIN_ROLES),
            AccessDecision::RedirectToHome
        );
    }

    #[test]
    fn redirect_to_login_without_principal() {
        for profile in [
            ProfileState::Loading,
            ProfileState::Missing,
            ProfileState::Loaded(Role::SuperAdmin),
        ] {
            assert_eq!(
                decide_access(AuthState::SignedOut, profile, ADMIN_ROLES),
                AccessDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn wait_while_loading() {
        assert_eq!(
            decide_access(
                AuthState::Loading,
                ProfileState::Loaded(Role::Admin),
                ADMIN_ROLES
            ),
            AccessDecision::Loading
        );
        assert_eq!(
            decide_access(AuthState::SignedIn, ProfileState::Loading, ADMIN_ROLES),
            AccessDecision::Loading
        );
    }
}
