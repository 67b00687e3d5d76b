use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

pub(crate) const NOTICE_DURATION_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) body: String,
}

impl Notice {
    pub(crate) fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Transient notice queue. The live list is the source of truth so the
/// dismiss timers never act on a stale render.
#[derive(Clone)]
pub(crate) struct NoticeBoard {
    state: UseStateHandle<Vec<(u64, Notice)>>,
    live: Rc<RefCell<Vec<(u64, Notice)>>>,
    seq: Rc<Cell<u64>>,
}

impl NoticeBoard {
    pub(crate) fn new(
        state: UseStateHandle<Vec<(u64, Notice)>>,
        live: Rc<RefCell<Vec<(u64, Notice)>>>,
        seq: Rc<Cell<u64>>,
    ) -> Self {
        Self { state, live, seq }
    }

    pub(crate) fn push(&self, notice: Notice) {
        let id = self.seq.get().wrapping_add(1);
        self.seq.set(id);
        self.live.borrow_mut().push((id, notice));
        self.state.set(self.live.borrow().clone());
        let board = self.clone();
        Timeout::new(NOTICE_DURATION_MS, move || board.dismiss(id)).forget();
    }

    pub(crate) fn dismiss(&self, id: u64) {
        self.live.borrow_mut().retain(|(item, _)| *item != id);
        self.state.set(self.live.borrow().clone());
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NoticeStackProps {
    pub(crate) notices: Vec<(u64, Notice)>,
    pub(crate) on_dismiss: Callback<u64>,
}

#[function_component(NoticeStack)]
pub(crate) fn notice_stack(props: &NoticeStackProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }
    html! {
        <div class="notice-stack">
            { for props.notices.iter().map(|(id, notice)| {
                let on_dismiss = props.on_dismiss.clone();
                let id = *id;
                let onclick = Callback::from(move |_| on_dismiss.emit(id));
                html! {
                    <div class="notice animate-slide-up" key={id.to_string()}>
                        <div class="notice-copy">
                            <p class="notice-title">{ &notice.title }</p>
                            <p class="notice-body">{ &notice.body }</p>
                        </div>
                        <button class="notice-close" {onclick}>{ "\u{00d7}" }</button>
                    </div>
                }
            }) }
        </div>
    }
}
