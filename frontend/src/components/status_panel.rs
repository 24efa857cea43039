use shared::{Status, StatusChannel};
use yew::prelude::*;

pub fn render_status(status: &StatusChannel) -> Html {
    let current = status.current();
    let Some(message) = current.message() else {
        return html! {};
    };

    let (class, icon) = match current {
        Status::Loading(_) => ("loading", "fa-solid fa-spinner fa-spin"),
        Status::Success(_) => ("success", "fa-solid fa-circle-check"),
        Status::Error(_) => ("error", "fa-solid fa-circle-exclamation"),
        Status::Idle => return html! {},
    };

    html! {
        <div class={classes!("status-message", "show", class)} role="status">
            <i class={icon}></i>
            <p>{ message }</p>
        </div>
    }
}
