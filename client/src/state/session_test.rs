use super::*;

// =============================================================
// Helpers
// =============================================================

fn user(token: &str) -> SignedInUser {
    SignedInUser { token: token.to_owned(), email: "a@b.com".to_owned(), user_id: "uid-1".to_owned() }
}

/// Backend whose storage is unavailable, like a browser with storage disabled.
struct UnavailableBackend;

impl SessionBackend for UnavailableBackend {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) {}
    fn remove(&self, _key: &str) {}
}

// =============================================================
// Reads
// =============================================================

#[test]
fn fresh_session_reads_absent() {
    let session = SessionSignal::in_memory();
    assert_eq!(session.read(), None);
    assert!(!session.is_authenticated());
    assert_eq!(session.identity(), None);
}

#[test]
fn empty_token_reads_absent() {
    let backend = Arc::new(MemoryBackend::default());
    backend.set(TOKEN_KEY, "");
    let session = SessionSignal::new(backend);
    assert_eq!(session.read(), None);
}

#[test]
fn unavailable_storage_reads_absent() {
    let session = SessionSignal::new(Arc::new(UnavailableBackend));
    session.write(SessionUpdate::SignIn(user("tok-1")));
    assert_eq!(session.read(), None);
}

#[test]
fn token_written_by_another_writer_is_visible() {
    let backend = Arc::new(MemoryBackend::default());
    let session = SessionSignal::new(backend.clone());
    backend.set(TOKEN_KEY, "tok-external");
    assert_eq!(session.read().as_deref(), Some("tok-external"));
}

// =============================================================
// Writes
// =============================================================

#[test]
fn sign_in_stores_token_and_identity() {
    let session = SessionSignal::in_memory();
    session.write(SessionUpdate::SignIn(user("tok-123")));
    assert_eq!(session.read().as_deref(), Some("tok-123"));
    assert_eq!(
        session.identity(),
        Some(SessionIdentity { email: "a@b.com".to_owned(), user_id: Some("uid-1".to_owned()) })
    );
}

#[test]
fn clear_removes_every_key() {
    let backend = Arc::new(MemoryBackend::default());
    let session = SessionSignal::new(backend.clone());
    session.write(SessionUpdate::SignIn(user("tok-123")));
    session.write(SessionUpdate::Clear);
    assert_eq!(session.read(), None);
    assert_eq!(backend.get(EMAIL_KEY), None);
    assert_eq!(backend.get(USER_ID_KEY), None);
}

#[test]
fn each_write_bumps_revision() {
    let session = SessionSignal::in_memory();
    assert_eq!(session.revision(), 0);
    session.write(SessionUpdate::SignIn(user("tok")));
    session.write(SessionUpdate::Clear);
    assert_eq!(session.revision(), 2);
}

#[test]
fn reads_do_not_bump_revision() {
    let session = SessionSignal::in_memory();
    session.write(SessionUpdate::SignIn(user("tok")));
    for _ in 0..5 {
        let _ = session.read();
        let _ = session.identity();
    }
    assert_eq!(session.revision(), 1);
}

#[test]
fn clones_share_the_same_backend() {
    let session = SessionSignal::in_memory();
    let other = session.clone();
    other.write(SessionUpdate::SignIn(user("tok")));
    assert!(session.is_authenticated());
    assert_eq!(session.revision(), 1);
}

#[test]
fn signed_in_user_needs_token_and_user_id() {
    let backend = Arc::new(MemoryBackend::default());
    let session = SessionSignal::new(backend.clone());
    assert_eq!(session.signed_in_user(), None);

    session.write(SessionUpdate::SignIn(user("tok-1")));
    assert_eq!(session.signed_in_user(), Some(user("tok-1")));

    backend.remove(USER_ID_KEY);
    assert_eq!(session.signed_in_user(), None);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_see_each_write_with_the_new_token() {
    let session = SessionSignal::in_memory();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = session.subscribe(move |token| sink.lock().unwrap().push(token.map(str::to_owned)));

    session.write(SessionUpdate::SignIn(user("tok-1")));
    session.write(SessionUpdate::Clear);
    assert_eq!(*seen.lock().unwrap(), vec![Some("tok-1".to_owned()), None]);
}

#[test]
fn dropping_the_subscription_stops_callbacks() {
    let session = SessionSignal::in_memory();
    let calls = Arc::new(Mutex::new(0));
    let counter = calls.clone();
    let sub = session.subscribe(move |_| *counter.lock().unwrap() += 1);

    session.write(SessionUpdate::Clear);
    drop(sub);
    session.write(SessionUpdate::Clear);
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn subscription_outliving_the_session_is_harmless() {
    let session = SessionSignal::in_memory();
    let sub = session.subscribe(|_| {});
    drop(session);
    drop(sub);
}
