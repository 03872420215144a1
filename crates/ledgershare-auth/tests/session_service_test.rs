//! Integration tests for the session service.

use std::sync::Arc;

use ledgershare_auth::{AuthConfig, LoginInput, SessionService, SignupInput};
use ledgershare_core::error::PortalError;
use ledgershare_core::models::identity::{Role, UpdateIdentity};
use ledgershare_core::notify::{Notice, NoticeLevel, RecordingNotifier};
use ledgershare_core::repository::{IdentityRepository, SessionStorage};
use ledgershare_store::{
    FileSessionStorage, InMemoryBackend, InMemoryIdentityRepository, MemorySessionStorage,
};

type Service<S> = SessionService<InMemoryIdentityRepository, S>;

fn setup() -> (
    Service<MemorySessionStorage>,
    MemorySessionStorage,
    RecordingNotifier,
) {
    let backend = InMemoryBackend::seeded();
    let storage = MemorySessionStorage::new();
    let notifier = RecordingNotifier::new();
    let svc = SessionService::new(
        backend.identities,
        storage.clone(),
        Arc::new(notifier.clone()),
        AuthConfig::default(),
    );
    (svc, storage, notifier)
}

fn login(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.into(),
        password: password.into(),
    }
}

fn signup(email: &str, name: &str, role: Role) -> SignupInput {
    SignupInput {
        email: email.into(),
        password: "hunter2".into(),
        name: name.into(),
        role,
    }
}

#[tokio::test]
async fn login_ignores_password() {
    let (svc, storage, notifier) = setup();

    let identity = svc
        .login(login("admin@example.com", "anything"))
        .await
        .unwrap();

    assert_eq!(identity.role, Role::Accountant);
    assert_eq!(svc.current().await, Some(identity));
    assert!(storage.get_item("user").await.unwrap().is_some());
    assert_eq!(notifier.last(), Some(Notice::success("Login successful")));
}

#[tokio::test]
async fn login_unknown_email_is_invalid_credentials() {
    let (svc, storage, notifier) = setup();

    let err = svc.login(login("nobody@x.com", "x")).await.unwrap_err();

    assert!(
        matches!(err, PortalError::InvalidCredentials),
        "expected InvalidCredentials, got: {err:?}"
    );
    assert!(svc.current().await.is_none());
    assert!(storage.get_item("user").await.unwrap().is_none());

    let notice = notifier.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Login failed: Invalid credentials");
}

#[tokio::test]
async fn logout_clears_session_and_is_idempotent() {
    let (svc, storage, notifier) = setup();
    svc.login(login("client@example.com", "pw")).await.unwrap();

    svc.logout().await.unwrap();
    svc.logout().await.unwrap();

    assert!(svc.current().await.is_none());
    assert!(storage.get_item("user").await.unwrap().is_none());
    assert_eq!(notifier.last(), Some(Notice::info("Logged out successfully")));
}

#[tokio::test]
async fn signup_creates_and_signs_in() {
    let (svc, _storage, _notifier) = setup();

    let identity = svc
        .signup(signup("new@example.com", "New Client", Role::Client))
        .await
        .unwrap();

    assert_eq!(identity.id.as_str(), "3");
    assert_eq!(svc.current().await, Some(identity.clone()));

    // The new account can now log in.
    svc.logout().await.unwrap();
    let again = svc.login(login("new@example.com", "")).await.unwrap();
    assert_eq!(again, identity);
}

#[tokio::test]
async fn signup_with_taken_email_fails() {
    let (svc, _storage, notifier) = setup();

    let err = svc
        .signup(signup("admin@example.com", "Copycat", Role::Accountant))
        .await
        .unwrap_err();

    assert!(matches!(err, PortalError::DuplicateEmail { .. }));
    assert!(svc.current().await.is_none());
    assert!(notifier.last().unwrap().message.starts_with("Signup failed:"));
}

#[tokio::test]
async fn signup_rejects_malformed_input() {
    let (svc, _storage, _notifier) = setup();

    let err = svc
        .signup(signup("not-an-email", "Someone", Role::Client))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Validation { .. }));

    let err = svc
        .signup(signup("ok@example.com", "   ", Role::Client))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Validation { .. }));
}

#[tokio::test]
async fn session_survives_reload_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let backend = InMemoryBackend::seeded();

    let first = SessionService::new(
        backend.identities.clone(),
        FileSessionStorage::new(dir.path()),
        Arc::new(RecordingNotifier::new()),
        AuthConfig::default(),
    );
    let created = first
        .signup(signup("reload@example.com", "Reload Person", Role::Accountant))
        .await
        .unwrap();
    drop(first);

    // Simulated reload: fresh service over the same device storage.
    let second = SessionService::new(
        backend.identities,
        FileSessionStorage::new(dir.path()),
        Arc::new(RecordingNotifier::new()),
        AuthConfig::default(),
    );
    assert!(second.current().await.is_none());

    let restored = second.restore().await.unwrap().unwrap();
    assert_eq!(restored.email, created.email);
    assert_eq!(restored.name, created.name);
    assert_eq!(restored.role, created.role);
    assert_eq!(second.current().await, Some(restored));
}

#[tokio::test]
async fn restore_discards_corrupt_session() {
    let (svc, storage, _notifier) = setup();
    storage.set_item("user", "{not json".into()).await.unwrap();

    assert!(svc.restore().await.unwrap().is_none());
    assert!(storage.get_item("user").await.unwrap().is_none());
}

#[tokio::test]
async fn update_profile_requires_session_and_persists() {
    let (svc, storage, _notifier) = setup();

    let err = svc
        .update_profile(UpdateIdentity {
            name: Some("Nobody".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::NotAuthenticated));

    svc.login(login("admin@example.com", "")).await.unwrap();
    let updated = svc
        .update_profile(UpdateIdentity {
            name: Some("Chief Accountant".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Chief Accountant");
    let raw = storage.get_item("user").await.unwrap().unwrap();
    assert!(raw.contains("Chief Accountant"));
}

#[tokio::test]
async fn provisioned_client_login_does_not_switch_session() {
    let backend = InMemoryBackend::seeded();
    let svc = SessionService::new(
        backend.identities.clone(),
        MemorySessionStorage::new(),
        Arc::new(RecordingNotifier::new()),
        AuthConfig::default(),
    );
    let admin = svc.login(login("admin@example.com", "")).await.unwrap();

    let provisioned = svc
        .provision_client_login("acme@example.com", "Acme Books")
        .await
        .unwrap();

    assert_eq!(provisioned.role, Role::Client);
    assert_eq!(svc.current().await, Some(admin));
    assert!(
        backend
            .identities
            .get_by_email("acme@example.com")
            .await
            .is_ok()
    );

    let err = svc
        .provision_client_login("acme@example.com", "Acme Again")
        .await
        .unwrap_err();
    match err {
        PortalError::DuplicateEmail { entity, .. } => assert_eq!(entity, "client"),
        other => panic!("expected DuplicateEmail, got {other:?}"),
    }
}

fn file_service(
    base: std::path::PathBuf,
) -> (Service<FileSessionStorage>, InMemoryIdentityRepository) {
    let backend = InMemoryBackend::seeded();
    let svc = SessionService::new(
        backend.identities.clone(),
        FileSessionStorage::new(base),
        Arc::new(RecordingNotifier::new()),
        AuthConfig::default(),
    );
    (svc, backend.identities)
}

#[tokio::test]
async fn signup_is_undone_when_session_cannot_be_saved() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let (svc, identities) = file_service(blocker.join("session"));

    let err = svc
        .signup(signup("p@x.com", "Pat", Role::Client))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Storage(_)));
    assert!(svc.current().await.is_none());
    assert!(identities.get_by_email("p@x.com").await.is_err());
    assert_eq!(identities.list().await.unwrap().len(), 2);

    // Retrying hits the same storage failure, not a duplicate account.
    let err = svc
        .signup(signup("p@x.com", "Pat", Role::Client))
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Storage(_)));
}

#[tokio::test]
async fn profile_edit_is_undone_when_session_cannot_be_saved() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("session");
    let (svc, identities) = file_service(base.clone());
    let admin = svc.login(login("admin@example.com", "")).await.unwrap();

    std::fs::remove_dir_all(&base).unwrap();
    std::fs::write(&base, "not a directory").unwrap();

    let err = svc
        .update_profile(UpdateIdentity {
            name: Some("Renamed".into()),
            email: Some("renamed@example.com".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::Storage(_)));

    let stored = identities.get_by_id(&admin.id).await.unwrap();
    assert_eq!(stored, admin);
    assert_eq!(svc.current().await, Some(admin));
    assert!(identities.get_by_email("renamed@example.com").await.is_err());
}
