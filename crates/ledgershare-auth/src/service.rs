//! Session service — login, signup and logout orchestration.
//!
//! The active identity is mirrored into device storage on every change so
//! that [`SessionService::restore`] can bring it back after a reload.

use std::sync::Arc;

use ledgershare_core::error::{PortalError, PortalResult};
use ledgershare_core::models::identity::{CreateIdentity, Identity, Role, UpdateIdentity};
use ledgershare_core::notify::{Notice, Notifier, report};
use ledgershare_core::repository::{IdentityRepository, SessionStorage};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    /// Accepted for interface compatibility; never checked.
    pub password: String,
}

/// Input for account registration.
#[derive(Debug)]
pub struct SignupInput {
    pub email: String,
    /// Accepted for interface compatibility; never stored.
    pub password: String,
    pub name: String,
    pub role: Role,
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthError::InvalidInput {
            field: "email",
            reason: format!("{email:?} is not an email address"),
        }),
    }
}

fn validate_name(name: &str) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::InvalidInput {
            field: "name",
            reason: "must not be blank".into(),
        });
    }
    Ok(())
}

/// Session store.
///
/// Generic over the identity repository and the device storage so the
/// session layer has no dependency on the store crate.
pub struct SessionService<I: IdentityRepository, S: SessionStorage> {
    identities: I,
    storage: S,
    notifier: Arc<dyn Notifier>,
    config: AuthConfig,
    current: RwLock<Option<Identity>>,
}

impl<I: IdentityRepository, S: SessionStorage> SessionService<I, S> {
    pub fn new(identities: I, storage: S, notifier: Arc<dyn Notifier>, config: AuthConfig) -> Self {
        Self {
            identities,
            storage,
            notifier,
            config,
            current: RwLock::new(None),
        }
    }

    /// The identity signed in right now, if any.
    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    /// Load the persisted identity into the active session.
    ///
    /// Called once at application start. A stored value that no longer
    /// parses is discarded rather than treated as fatal.
    pub async fn restore(&self) -> PortalResult<Option<Identity>> {
        let Some(raw) = self.storage.get_item(&self.config.session_key).await? else {
            debug!("no persisted session");
            return Ok(None);
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                info!(id = %identity.id, role = identity.role.as_str(), "session restored");
                *self.current.write().await = Some(identity.clone());
                Ok(Some(identity))
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable persisted session");
                self.storage.remove_item(&self.config.session_key).await?;
                Ok(None)
            }
        }
    }

    /// Sign in by email. The password is not verified.
    pub async fn login(&self, input: LoginInput) -> PortalResult<Identity> {
        let result = self.login_inner(input).await;
        report(self.notifier.as_ref(), result, "Login failed", |_| {
            Notice::success("Login successful")
        })
    }

    async fn login_inner(&self, input: LoginInput) -> PortalResult<Identity> {
        let identity = self
            .identities
            .get_by_email(&input.email)
            .await
            .map_err(|e| match e {
                PortalError::NotFound { .. } => AuthError::InvalidCredentials.into(),
                other => other,
            })?;

        self.activate(&identity).await?;
        info!(id = %identity.id, "login succeeded");
        Ok(identity)
    }

    /// End the session. Safe to call when nobody is signed in.
    pub async fn logout(&self) -> PortalResult<()> {
        let result = self.storage.remove_item(&self.config.session_key).await;
        if result.is_ok() {
            *self.current.write().await = None;
        }
        report(self.notifier.as_ref(), result, "Logout failed", |_| {
            Notice::info("Logged out successfully")
        })
    }

    /// Register a new identity and sign it in.
    pub async fn signup(&self, input: SignupInput) -> PortalResult<Identity> {
        let result = self.signup_inner(input).await;
        report(self.notifier.as_ref(), result, "Signup failed", |_| {
            Notice::success("Account created successfully")
        })
    }

    async fn signup_inner(&self, input: SignupInput) -> PortalResult<Identity> {
        validate_email(&input.email)?;
        validate_name(&input.name)?;

        let identity = self
            .identities
            .create(CreateIdentity {
                email: input.email,
                name: input.name,
                role: input.role,
            })
            .await?;

        if let Err(e) = self.activate(&identity).await {
            self.undo(self.identities.delete(&identity.id), &identity).await;
            return Err(e);
        }
        info!(id = %identity.id, role = identity.role.as_str(), "account created");
        Ok(identity)
    }

    /// Edit the signed-in identity's name or email.
    pub async fn update_profile(&self, input: UpdateIdentity) -> PortalResult<Identity> {
        let result = self.update_profile_inner(input).await;
        report(self.notifier.as_ref(), result, "Profile update failed", |_| {
            Notice::success("Profile updated successfully")
        })
    }

    async fn update_profile_inner(&self, input: UpdateIdentity) -> PortalResult<Identity> {
        let current = self.current().await.ok_or(AuthError::NotAuthenticated)?;
        if let Some(email) = &input.email {
            validate_email(email)?;
        }
        if let Some(name) = &input.name {
            validate_name(name)?;
        }

        let identity = self.identities.update(&current.id, input).await?;
        if let Err(e) = self.activate(&identity).await {
            let previous = UpdateIdentity {
                name: Some(current.name.clone()),
                email: Some(current.email.clone()),
            };
            self.undo(self.identities.update(&current.id, previous), &identity)
                .await;
            return Err(e);
        }
        Ok(identity)
    }

    /// Create a client-role login on behalf of an accountant. The active
    /// session is left untouched.
    pub async fn provision_client_login(&self, email: &str, name: &str) -> PortalResult<Identity> {
        let result = self.provision_inner(email, name).await;
        report(self.notifier.as_ref(), result, "Failed to add client", |_| {
            Notice::success("Client added successfully")
        })
    }

    async fn provision_inner(&self, email: &str, name: &str) -> PortalResult<Identity> {
        validate_email(email)?;
        validate_name(name)?;

        self.identities
            .create(CreateIdentity {
                email: email.into(),
                name: name.into(),
                role: Role::Client,
            })
            .await
            .map_err(|e| match e {
                PortalError::DuplicateEmail { email, .. } => {
                    PortalError::duplicate_email("client", &email)
                }
                other => other,
            })
    }

    async fn activate(&self, identity: &Identity) -> PortalResult<()> {
        let raw = serde_json::to_string(identity).map_err(AuthError::from)?;
        self.storage
            .set_item(&self.config.session_key, raw)
            .await?;
        *self.current.write().await = Some(identity.clone());
        Ok(())
    }

    /// Revert a repository write whose session could not be persisted.
    /// The caller sees the persistence error; a failed revert is only logged.
    async fn undo<T>(&self, revert: impl Future<Output = PortalResult<T>>, identity: &Identity) {
        match revert.await {
            Ok(_) => debug!(id = %identity.id, "identity write reverted"),
            Err(e) => warn!(id = %identity.id, error = %e, "failed to revert identity write"),
        }
    }
}
