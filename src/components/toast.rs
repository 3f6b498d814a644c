use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::functional::hook;
use yew::prelude::*;

const TOAST_LIMIT: usize = 3;
const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    shown: Vec<(u32, Notice)>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Toasts {
    pub fn shown(&self) -> &[(u32, Notice)] {
        &self.shown
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.shown.push((next.next_id, notice));
                next.next_id += 1;
                if next.shown.len() > TOAST_LIMIT {
                    let overflow = next.shown.len() - TOAST_LIMIT;
                    next.shown.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.shown.retain(|(shown_id, _)| *shown_id != id),
        }
        next.into()
    }
}

pub type ToastContext = UseReducerHandle<Toasts>;

/// Returns a callback that shows a transient notice.
#[hook]
pub fn use_toast() -> Callback<Notice> {
    let toasts = use_context::<ToastContext>();
    Callback::from(move |notice: Notice| match &toasts {
        Some(toasts) => toasts.dispatch(ToastAction::Push(notice)),
        None => warn!("Toast dropped, no ToastProvider above: {}", notice.title),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            { for props.children.iter() }
            <Toaster />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(Toaster)]
fn toaster() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                        max-width: 24rem;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        background: rgba(20, 20, 30, 0.95);
                        backdrop-filter: blur(10px);
                        border: 1px solid rgba(139, 92, 246, 0.3);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        color: #fff;
                        cursor: pointer;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.875rem;
                        color: #b4b4c8;
                    }
                "#}
            </style>
            { for toasts.shown().iter().map(|(id, notice)| html! {
                <ToastItem
                    key={*id}
                    id={*id}
                    notice={notice.clone()}
                    on_dismiss={on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast" role="status" {onclick}>
            <div class="toast-title">{ props.notice.title.clone() }</div>
            <div class="toast-description">{ props.notice.description.clone() }</div>
        </div>
    }
}
