//! Log In page

use super::{AppContext, Followup, FormPhase, ViewMachine, GENERIC_ERROR};
use crate::api::DataStore;
use crate::routes::Route;
use crate::session::KeyValueStore;
use crate::validation::validate_log_in;

pub const UNKNOWN_USER: &str = "User not found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogInView {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub phase: FormPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInEffect {
    Authenticate { email: String, password: String },
}

impl ViewMachine for LogInView {
    type Event = LogInEvent;
    type Effect = LogInEffect;

    fn transition(mut self, event: LogInEvent) -> (Self, Option<LogInEffect>) {
        match event {
            LogInEvent::EmailChanged(email) => self.email = email,
            LogInEvent::PasswordChanged(password) => self.password = password,
            LogInEvent::Submit => {
                if self.phase == FormPhase::Submitting {
                    return (self, None);
                }
                self.error = None;
                if let Err(problem) = validate_log_in(&self.email, &self.password) {
                    self.error = Some(problem.to_string());
                    return (self, None);
                }
                self.phase = FormPhase::Submitting;
                let effect = LogInEffect::Authenticate {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                return (self, Some(effect));
            }
            LogInEvent::Failed(message) => {
                self.phase = FormPhase::Editing;
                self.error = Some(message);
            }
        }
        (self, None)
    }

    async fn perform<D: DataStore, S: KeyValueStore>(
        effect: LogInEffect,
        ctx: &AppContext<D, S>,
    ) -> Followup<LogInEvent> {
        let LogInEffect::Authenticate { email, password } = effect;
        let found = match ctx.users.find_by_credentials(&email, &password).await {
            Ok(found) => found,
            Err(error) => {
                tracing::error!("Log in lookup failed: {error}");
                return Followup::Event(LogInEvent::Failed(GENERIC_ERROR.to_string()));
            }
        };

        let Some(user) = found else {
            return Followup::Event(LogInEvent::Failed(UNKNOWN_USER.to_string()));
        };
        match ctx.session.login(user) {
            Ok(()) => Followup::Navigate(Route::Home),
            Err(error) => {
                tracing::error!("Failed to persist session: {error}");
                Followup::Event(LogInEvent::Failed(GENERIC_ERROR.to_string()))
            }
        }
    }
}
