use gloo::timers::future::TimeoutFuture;
use shared::notification::NOTIFICATION_DURATION_MS;
use shared::{Notification, RequestSequencer};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseNotificationsResult {
    pub current: Option<Notification>,
    pub actions: UseNotificationsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseNotificationsActions {
    pub notify: Callback<Notification>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let current = use_state(|| Option::<Notification>::None);
    // A newer notification must not be cleared by an older one's timer
    let generations = use_mut_ref(RequestSequencer::default);

    let notify = {
        let current = current.clone();
        let generations = generations.clone();

        use_callback((), move |notification: Notification, _| {
            let ticket = generations.borrow_mut().issue();
            current.set(Some(notification));

            let current = current.clone();
            let generations = generations.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
                if generations.borrow().is_latest(ticket) {
                    current.set(None);
                }
            });
        })
    };

    let dismiss = {
        let current = current.clone();
        let generations = generations.clone();

        use_callback((), move |_: (), _| {
            generations.borrow_mut().issue();
            current.set(None);
        })
    };

    UseNotificationsResult {
        current: (*current).clone(),
        actions: UseNotificationsActions { notify, dismiss },
    }
}
