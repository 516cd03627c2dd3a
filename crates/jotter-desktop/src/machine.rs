//! Hook that runs a page state machine inside a component

use dioxus::prelude::*;
use jotter_core::views::{drive, Followup, ViewMachine};
use jotter_core::Route;

use crate::Services;

/// Hold a page's state in a signal and return a callback that feeds it
/// events.
///
/// The pure step is applied right away; effects run in a task owned by the
/// calling component, so they are dropped when the page unmounts. State is
/// read with `peek` so an effect that sends an event does not subscribe to
/// the view.
pub fn use_machine<V>(init: impl FnOnce() -> V) -> (Signal<V>, Callback<V::Event>)
where
    V: ViewMachine + Clone + 'static,
    V::Event: 'static,
    V::Effect: 'static,
{
    let services = use_context::<Services>();
    let mut route = use_context::<Signal<Route>>();
    let mut view = use_signal(init);

    let send = use_callback(move |event: V::Event| {
        let current = V::clone(&view.peek());
        let (next, effect) = current.transition(event);
        view.set(next);
        let Some(effect) = effect else {
            return;
        };

        let services = services.clone();
        spawn(async move {
            let target = match V::perform(effect, &services).await {
                Followup::Event(followup) => {
                    let current = V::clone(&view.peek());
                    drive(current, followup, &services, |state| view.set(state.clone()))
                        .await
                        .navigate
                }
                Followup::Navigate(target) => Some(target),
                Followup::Idle => None,
            };
            if let Some(target) = target {
                route.set(target);
            }
        });
    });

    (view, send)
}
