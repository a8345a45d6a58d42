use crate::models::{Role, User};

/// Pure session state machine: anonymous (no token) or authenticated
/// (token present, profile loaded lazily).
///
/// The epoch counter guards against stale profile writes. Every
/// transition that invalidates in-flight fetches (login, logout) bumps
/// the epoch; a fetch records the epoch it started under and its result
/// is dropped if the epoch moved on. Without this, `logout()` during an
/// in-flight profile fetch would resurrect the session when the late
/// response arrives.
#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
    token: Option<String>,
    user: Option<User>,
    epoch: u64,
}

impl Session {
    pub fn new(token: Option<String>, cached_user: Option<User>) -> Self {
        Self {
            token,
            user: cached_user,
            epoch: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Begins the authenticated state. The profile is fetched
    /// asynchronously afterwards; the UI shows the session as signed in
    /// before the profile resolves.
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.epoch += 1;
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.epoch += 1;
    }

    /// Marks the start of a profile fetch; the returned ticket must be
    /// presented when the response lands.
    pub fn begin_profile_fetch(&self) -> u64 {
        self.epoch
    }

    /// Applies a profile response. Returns false when the response is
    /// stale (the session transitioned while the fetch was in flight)
    /// and was discarded.
    pub fn apply_profile(&mut self, ticket: u64, user: User) -> bool {
        if ticket != self.epoch || self.token.is_none() {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// A failed profile fetch on a current ticket is an implicit logout
    /// (expired or invalid token). Stale failures are ignored.
    pub fn profile_fetch_failed(&mut self, ticket: u64) -> bool {
        if ticket != self.epoch {
            return false;
        }
        self.logout();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            email: format!("u{id}@example.com"),
            full_name: format!("User {id}"),
            role,
            phone: None,
            avatar: None,
            is_verified: false,
        }
    }

    #[test]
    fn starts_anonymous_without_token() {
        let session = Session::new(None, None);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn login_then_profile_applies() {
        let mut session = Session::new(None, None);
        session.login("jwt".to_string());
        assert!(session.is_authenticated());

        let ticket = session.begin_profile_fetch();
        assert!(session.apply_profile(ticket, user(1, Role::Guest)));
        assert_eq!(session.user().map(|u| u.id), Some(1));
    }

    #[test]
    fn logout_during_fetch_does_not_resurrect_session() {
        let mut session = Session::new(Some("jwt".to_string()), None);
        let ticket = session.begin_profile_fetch();

        // User signs out while the profile request is still in flight.
        session.logout();

        // The late response must be discarded.
        assert!(!session.apply_profile(ticket, user(1, Role::Guest)));
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn relogin_during_fetch_discards_previous_fetch() {
        let mut session = Session::new(Some("old".to_string()), None);
        let stale_ticket = session.begin_profile_fetch();

        session.login("new".to_string());
        let fresh_ticket = session.begin_profile_fetch();

        assert!(!session.apply_profile(stale_ticket, user(1, Role::Guest)));
        assert!(session.apply_profile(fresh_ticket, user(2, Role::Host)));
        assert_eq!(session.user().map(|u| u.id), Some(2));
    }

    #[test]
    fn failed_fetch_is_implicit_logout() {
        let mut session = Session::new(Some("expired".to_string()), None);
        let ticket = session.begin_profile_fetch();
        assert!(session.profile_fetch_failed(ticket));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn stale_failure_does_not_clobber_new_session() {
        let mut session = Session::new(Some("old".to_string()), None);
        let stale_ticket = session.begin_profile_fetch();

        session.login("new".to_string());
        assert!(!session.profile_fetch_failed(stale_ticket));
        assert!(session.is_authenticated());
    }

    #[test]
    fn concurrent_refreshes_last_write_wins() {
        // Two refreshes under the same epoch are both current; profile
        // data is idempotent so the later write winning is acceptable.
        let mut session = Session::new(Some("jwt".to_string()), None);
        let first = session.begin_profile_fetch();
        let second = session.begin_profile_fetch();

        assert!(session.apply_profile(first, user(1, Role::Guest)));
        assert!(session.apply_profile(second, user(1, Role::Guest)));
    }

    #[test]
    fn admin_gate() {
        let mut session = Session::new(Some("jwt".to_string()), None);
        let ticket = session.begin_profile_fetch();
        session.apply_profile(ticket, user(9, Role::Admin));
        assert!(session.is_admin());

        let mut guest = Session::new(Some("jwt".to_string()), Some(user(1, Role::Guest)));
        assert!(!guest.is_admin());
        guest.logout();
        assert!(guest.role().is_none());
    }
}
