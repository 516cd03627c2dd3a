//! Account lookups and registration against the `users` collection.

use crate::api::{decode, encode, DataStore, Resource};
use crate::models::{NewUser, User};
use crate::Result;

/// Read/create access to registered accounts.
#[derive(Debug, Clone)]
pub struct UserDirectory<D: DataStore> {
    store: D,
}

impl<D: DataStore> UserDirectory<D> {
    pub const fn new(store: D) -> Self {
        Self { store }
    }

    /// First account registered under `email`, if any
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let records = self
            .store
            .fetch_all(Resource::Users, &[("email", email.to_string())])
            .await?;
        first_user(records)
    }

    /// Account whose stored email and password both match.
    ///
    /// Passwords are compared verbatim by the data store.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        let records = self
            .store
            .fetch_all(
                Resource::Users,
                &[
                    ("email", email.to_string()),
                    ("password", password.to_string()),
                ],
            )
            .await?;
        first_user(records)
    }

    /// Register a new account. Email uniqueness is the caller's check.
    pub async fn create(&self, email: &str, password: &str) -> Result<User> {
        let payload = encode(&NewUser::new(email, password))?;
        let record = self.store.create(Resource::Users, payload).await?;
        let user: User = decode(record)?;
        tracing::debug!("Registered user {}", user.id);
        Ok(user)
    }
}

fn first_user(records: Vec<serde_json::Value>) -> Result<Option<User>> {
    records
        .into_iter()
        .next()
        .map(decode::<User>)
        .transpose()
        .map_err(Into::into)
}
