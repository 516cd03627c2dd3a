//! Sign Up page

use super::{AppContext, Followup, FormPhase, ViewMachine, GENERIC_ERROR};
use crate::api::DataStore;
use crate::models::User;
use crate::routes::Route;
use crate::session::KeyValueStore;
use crate::validation::validate_sign_up;

pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpView {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub error: Option<String>,
    pub phase: FormPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpEvent {
    EmailChanged(String),
    PasswordChanged(String),
    RepeatPasswordChanged(String),
    Submit,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpEffect {
    Register { email: String, password: String },
}

impl ViewMachine for SignUpView {
    type Event = SignUpEvent;
    type Effect = SignUpEffect;

    fn transition(mut self, event: SignUpEvent) -> (Self, Option<SignUpEffect>) {
        match event {
            SignUpEvent::EmailChanged(email) => self.email = email,
            SignUpEvent::PasswordChanged(password) => self.password = password,
            SignUpEvent::RepeatPasswordChanged(repeat) => self.repeat_password = repeat,
            SignUpEvent::Submit => {
                if self.phase == FormPhase::Submitting {
                    return (self, None);
                }
                self.error = None;
                if let Err(problem) =
                    validate_sign_up(&self.email, &self.password, &self.repeat_password)
                {
                    self.error = Some(problem.to_string());
                    return (self, None);
                }
                self.phase = FormPhase::Submitting;
                let effect = SignUpEffect::Register {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                return (self, Some(effect));
            }
            SignUpEvent::Failed(message) => {
                self.phase = FormPhase::Editing;
                self.error = Some(message);
            }
        }
        (self, None)
    }

    async fn perform<D: DataStore, S: KeyValueStore>(
        effect: SignUpEffect,
        ctx: &AppContext<D, S>,
    ) -> Followup<SignUpEvent> {
        let SignUpEffect::Register { email, password } = effect;
        match register(ctx, &email, &password).await {
            Ok(Some(_)) => Followup::Navigate(Route::Home),
            Ok(None) => Followup::Event(SignUpEvent::Failed(DUPLICATE_EMAIL.to_string())),
            Err(error) => {
                tracing::error!("Sign up failed: {error}");
                Followup::Event(SignUpEvent::Failed(GENERIC_ERROR.to_string()))
            }
        }
    }
}

/// Create the account unless the email is taken, then log it in.
///
/// The lookup and the create are separate requests, so two concurrent sign
/// ups with one email can both succeed.
async fn register<D: DataStore, S: KeyValueStore>(
    ctx: &AppContext<D, S>,
    email: &str,
    password: &str,
) -> crate::Result<Option<User>> {
    if ctx.users.find_by_email(email).await?.is_some() {
        return Ok(None);
    }
    let user = ctx.users.create(email, password).await?;
    ctx.session.login(user.clone())?;
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::Resource;
    use crate::views::dispatch;
    use crate::views::fixtures::context;

    fn filled(email: &str, password: &str, repeat: &str) -> SignUpView {
        SignUpView {
            email: email.to_string(),
            password: password.to_string(),
            repeat_password: repeat.to_string(),
            ..SignUpView::default()
        }
    }

    #[test]
    fn field_events_update_form() {
        let (view, effect) = SignUpView::default()
            .transition(SignUpEvent::EmailChanged("a@b.com".to_string()));
        assert_eq!(view.email, "a@b.com");
        assert!(effect.is_none());
    }

    #[test]
    fn invalid_submit_sets_error_without_effect() {
        let (view, effect) =
            filled("a@b.com", "Abcdef12", "Abcdef13").transition(SignUpEvent::Submit);
        assert_eq!(view.error.as_deref(), Some("Passwords do not match"));
        assert_eq!(view.phase, FormPhase::Editing);
        assert!(effect.is_none());
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let (view, effect) =
            filled("a@b.com", "Abcdef12", "Abcdef12").transition(SignUpEvent::Submit);
        assert_eq!(view.phase, FormPhase::Submitting);
        assert_eq!(
            effect,
            Some(SignUpEffect::Register {
                email: "a@b.com".to_string(),
                password: "Abcdef12".to_string(),
            })
        );
    }

    #[test]
    fn repeat_submit_while_submitting_is_dropped() {
        let (view, _) =
            filled("a@b.com", "Abcdef12", "Abcdef12").transition(SignUpEvent::Submit);
        let (view, effect) = view.transition(SignUpEvent::Submit);
        assert_eq!(view.phase, FormPhase::Submitting);
        assert!(effect.is_none());
    }

    #[test]
    fn failure_returns_to_editing() {
        let (view, _) =
            filled("a@b.com", "Abcdef12", "Abcdef12").transition(SignUpEvent::Submit);
        let (view, _) = view.transition(SignUpEvent::Failed(DUPLICATE_EMAIL.to_string()));
        assert_eq!(view.phase, FormPhase::Editing);
        assert_eq!(view.error.as_deref(), Some(DUPLICATE_EMAIL));
    }

    #[tokio::test]
    async fn successful_sign_up_logs_in_and_goes_home() {
        let (data, ctx) = context();

        let view = filled("a@b.com", "Abcdef12", "Abcdef12");
        let outcome = dispatch(view, SignUpEvent::Submit, &ctx).await;

        assert_eq!(outcome.navigate, Some(Route::Home));
        assert_eq!(
            ctx.session.current_user().map(|user| user.email),
            Some("a@b.com".to_string())
        );
        assert_eq!(data.records(Resource::Users).len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_error() {
        let (data, ctx) = context();
        data.set_offline(true);

        let view = filled("a@b.com", "Abcdef12", "Abcdef12");
        let outcome = dispatch(view, SignUpEvent::Submit, &ctx).await;

        assert_eq!(outcome.navigate, None);
        assert_eq!(outcome.view.error.as_deref(), Some(GENERIC_ERROR));
        assert_eq!(outcome.view.phase, FormPhase::Editing);
        assert!(!ctx.session.is_logged_in());
    }
}
