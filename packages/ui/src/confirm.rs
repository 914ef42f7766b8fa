//! Modal overlay and destructive-action confirmation.

use dioxus::prelude::*;

/// Full-screen dimmer that closes on backdrop click. Clicks inside the box
/// stop propagating so the dialog stays open while the user works in it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-box",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { class: "modal-text", "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Pending-deletion state behind every list's confirmation dialog.
///
/// The destructive request may only be built from the id `confirm` hands
/// back. Cancelling discards the id, and `confirm` takes it, so neither a
/// cancel nor a double confirm can reach the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    pending: Option<i64>,
}

impl DeleteFlow {
    pub fn request(&mut self, id: i64) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn confirm(&mut self) -> Option<i64> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<i64> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_discards_the_request() {
        let mut flow = DeleteFlow::default();
        flow.request(42);
        assert_eq!(flow.pending(), Some(42));
        flow.cancel();
        assert_eq!(flow.pending(), None);
        // Nothing left to delete after a cancel.
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn confirm_hands_the_id_out_exactly_once() {
        let mut flow = DeleteFlow::default();
        flow.request(42);
        assert_eq!(flow.confirm(), Some(42));
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn a_new_request_replaces_the_old_one() {
        let mut flow = DeleteFlow::default();
        flow.request(1);
        flow.request(2);
        assert_eq!(flow.confirm(), Some(2));
    }
}
