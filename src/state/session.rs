#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state driving the login/chat view toggle.
///
/// `logged_in` is the only visibility input: the login view renders while it
/// is `false`, the chat view while it is `true`. It starts `false` so a
/// failed or never-settling startup probe leaves the user at the login view.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionState {
    pub logged_in: bool,
    /// The one-shot startup probe is in flight; the login form holds its
    /// submit until this clears.
    pub checking: bool,
}

impl SessionState {
    /// Mark the startup probe as dispatched.
    pub fn begin_check(&mut self) {
        self.checking = true;
    }

    /// Record the probe result. A failed probe reports logged out, so the
    /// fail-closed default survives.
    pub fn finish_check(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
        self.checking = false;
    }
}
