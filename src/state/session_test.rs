use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_logged_out() {
    let state = SessionState::default();
    assert!(!state.logged_in);
}

#[test]
fn session_state_default_not_checking() {
    let state = SessionState::default();
    assert!(!state.checking);
}

// =============================================================
// Startup probe transitions
// =============================================================

#[test]
fn begin_check_raises_checking_only() {
    let mut state = SessionState::default();
    state.begin_check();
    assert!(state.checking);
    assert!(!state.logged_in);
}

#[test]
fn finish_check_with_session_logs_in_and_clears_checking() {
    let mut state = SessionState::default();
    state.begin_check();
    state.finish_check(true);
    assert!(state.logged_in);
    assert!(!state.checking);
}

#[test]
fn finish_check_without_session_stays_logged_out() {
    let mut state = SessionState::default();
    state.begin_check();
    state.finish_check(false);
    assert!(!state.logged_in);
    assert!(!state.checking);
}
