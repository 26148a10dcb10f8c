/// Transient on-screen messages, dismissed automatically

use crate::error::SyncError;
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// How long a message stays on screen
pub const MESSAGE_DISMISS_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u32,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    pub items: Vec<Message>,
}

pub enum MessageAction {
    Show(Message),
    Dismiss(u32),
}

impl Reducible for Messages {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            MessageAction::Show(message) => items.push(message),
            MessageAction::Dismiss(id) => items.retain(|m| m.id != id),
        }
        Rc::new(Messages { items })
    }
}

#[derive(Clone)]
pub struct MessageHandle {
    messages: UseReducerHandle<Messages>,
    next_id: Rc<RefCell<u32>>,
}

impl MessageHandle {
    pub fn items(&self) -> Vec<Message> {
        self.messages.items.clone()
    }

    /// Show a message and schedule its removal
    pub fn show(&self, text: impl Into<String>) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };
        self.messages.dispatch(MessageAction::Show(Message {
            id,
            text: text.into(),
        }));

        let messages = self.messages.clone();
        Timeout::new(MESSAGE_DISMISS_MS, move || {
            messages.dispatch(MessageAction::Dismiss(id));
        })
        .forget();
    }

    pub fn report(&self, summary: &str, err: &SyncError) {
        let notice = Notice::for_error(summary, err);
        if notice.log {
            log::error!("{}: {}", summary, err);
        }
        self.show(notice.text);
    }
}

/// What the popup shows for a failed action, and whether the cause is logged
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub log: bool,
}

impl Notice {
    /// Service failures are logged with their cause and shown with
    /// `summary`; validation failures are shown as-is.
    pub fn for_error(summary: &str, err: &SyncError) -> Notice {
        if err.is_user_error() {
            Notice {
                text: err.to_string(),
                log: false,
            }
        } else {
            Notice {
                text: format!("{} Please try again.", summary),
                log: true,
            }
        }
    }
}

#[hook]
pub fn use_messages() -> MessageHandle {
    let messages = use_reducer(Messages::default);
    let next_id = use_mut_ref(|| 0u32);
    MessageHandle { messages, next_id }
}

#[derive(Properties, PartialEq)]
pub struct MessageStackProps {
    pub messages: Vec<Message>,
}

#[function_component(MessageStack)]
pub fn message_stack(props: &MessageStackProps) -> Html {
    html! {
        <div class="error-message">
            {for props.messages.iter().map(|message| html! {
                <Alert
                    key={message.id}
                    r#type={AlertType::Danger}
                    title={message.text.clone()}
                    inline={true}
                >
                </Alert>
            })}
        </div>
    }
}
