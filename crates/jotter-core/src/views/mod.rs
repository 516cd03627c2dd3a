//! Page-level state machines.
//!
//! Every page is a plain value with a pure [`ViewMachine::transition`]. Side
//! effects come back out as data and are run by [`ViewMachine::perform`]
//! against the shared [`AppContext`], which may feed another event back in.
//! [`drive`] loops the two until the page settles or leaves.

pub mod home;
pub mod log_in;
pub mod not_found;
pub mod note_detail;
pub mod note_editor;
pub mod notes_list;
pub mod sign_up;

use std::future::Future;

use crate::api::DataStore;
use crate::notes::NoteAccess;
use crate::routes::Route;
use crate::session::{KeyValueStore, SessionController};
use crate::users::UserDirectory;

pub use home::HomeSummary;
pub use log_in::{LogInEffect, LogInEvent, LogInView};
pub use not_found::NotFoundView;
pub use note_detail::{NoteDetailEffect, NoteDetailEvent, NoteDetailView};
pub use note_editor::{EditorMode, NoteEditorEffect, NoteEditorEvent, NoteEditorView};
pub use notes_list::{NotesListEffect, NotesListEvent, NotesListView};
pub use sign_up::{SignUpEffect, SignUpEvent, SignUpView};

/// Shown for any data-access failure during sign up or log in
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Session plus data access, shared by every page. Clones are cheap and share
/// one session.
#[derive(Debug, Clone)]
pub struct AppContext<D: DataStore, S: KeyValueStore> {
    pub session: SessionController<S>,
    pub users: UserDirectory<D>,
    pub notes: NoteAccess<D>,
}

impl<D: DataStore, S: KeyValueStore> AppContext<D, S> {
    pub fn new(data: D, session_store: S) -> Self {
        Self {
            session: SessionController::new(session_store),
            users: UserDirectory::new(data.clone()),
            notes: NoteAccess::new(data),
        }
    }
}

/// Whether a form may accept another submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A request is in flight; further submits are dropped
    Submitting,
}

/// What happens after an effect has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup<E> {
    /// Feed this event back into the machine
    Event(E),
    /// Leave the page
    Navigate(Route),
    Idle,
}

pub trait ViewMachine: Sized {
    type Event;
    type Effect;

    /// Pure state step. Never touches the network or the session.
    fn transition(self, event: Self::Event) -> (Self, Option<Self::Effect>);

    fn perform<D: DataStore, S: KeyValueStore>(
        effect: Self::Effect,
        ctx: &AppContext<D, S>,
    ) -> impl Future<Output = Followup<Self::Event>>;
}

/// Final state of a [`drive`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<V> {
    pub view: V,
    pub navigate: Option<Route>,
}

/// Apply `event` and run effects until the view settles or navigates.
///
/// `observe` sees every intermediate state, so a renderer can show e.g. a
/// submitting form while the request is in flight.
pub async fn drive<V, D, S>(
    view: V,
    event: V::Event,
    ctx: &AppContext<D, S>,
    mut observe: impl FnMut(&V),
) -> Outcome<V>
where
    V: ViewMachine,
    D: DataStore,
    S: KeyValueStore,
{
    let mut view = view;
    let mut event = event;
    loop {
        let (next, effect) = view.transition(event);
        view = next;
        observe(&view);

        let Some(effect) = effect else {
            return Outcome {
                view,
                navigate: None,
            };
        };
        match V::perform(effect, ctx).await {
            Followup::Event(followup) => event = followup,
            Followup::Navigate(route) => {
                return Outcome {
                    view,
                    navigate: Some(route),
                }
            }
            Followup::Idle => {
                return Outcome {
                    view,
                    navigate: None,
                }
            }
        }
    }
}

/// [`drive`] without observing intermediate states
pub async fn dispatch<V, D, S>(view: V, event: V::Event, ctx: &AppContext<D, S>) -> Outcome<V>
where
    V: ViewMachine,
    D: DataStore,
    S: KeyValueStore,
{
    drive(view, event, ctx, |_| {}).await
}

/// Log out from any protected page; always lands on Log In.
pub fn log_out<D: DataStore, S: KeyValueStore>(ctx: &AppContext<D, S>) -> Route {
    if let Err(error) = ctx.session.logout() {
        tracing::warn!("Failed to clear persisted session: {error}");
    }
    Route::LogIn
}
