use std::time::Duration;

use dioxus::prelude::*;

use crate::core::{clipboard, platform};
use crate::t;

/// How long the copy button shows its outcome before resetting.
const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq)]
enum CopyState {
    Idle,
    Copied,
    Failed,
}

/// Read-only code block, optionally with a copy-to-clipboard button.
///
/// `on_copy` fires on every press of the copy button, whether or not the
/// clipboard accepted the text.
#[component]
pub fn CodeSample(
    language: String,
    code: String,
    #[props(default)] copy_button: bool,
    on_copy: Option<EventHandler<()>>,
) -> Element {
    let mut state = use_signal(|| CopyState::Idle);

    let copy_handler = {
        let code = code.clone();
        move |_| {
            if let Some(handler) = on_copy {
                handler.call(());
            }
            match clipboard::copy_text(&code) {
                Ok(()) => state.set(CopyState::Copied),
                Err(err) => {
                    tracing::warn!(target: "clipboard", "{err}");
                    state.set(CopyState::Failed);
                }
            }
            spawn(async move {
                platform::sleep(COPY_FEEDBACK).await;
                state.set(CopyState::Idle);
            });
        }
    };

    let label = match state() {
        CopyState::Idle => t!("code-copy"),
        CopyState::Copied => t!("code-copied"),
        CopyState::Failed => t!("code-copy-failed"),
    };

    rsx! {
        div { class: "code-sample code-sample--{language}",
            if copy_button {
                button {
                    class: "button button--ghost code-sample__copy",
                    r#type: "button",
                    onclick: copy_handler,
                    "{label}"
                }
            }
            pre { class: "code-sample__body",
                code { class: "language-{language}", "{code}" }
            }
        }
    }
}
