use shared::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = &props.notification else {
        return html! {};
    };

    let kind_class = if notification.is_error() { "error" } else { "success" };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("notification", kind_class)} role="status">
            <div class="notification-title">{&notification.title}</div>
            <div class="notification-message">{&notification.message}</div>
            <button type="button" class="notification-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
