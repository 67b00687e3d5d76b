use std::cell::RefCell;
use std::rc::Rc;

use foliolab_core::{reduce, template_by_id, EditorAction, EditorState, Template, TEMPLATE_CATALOG};

pub(crate) type StoreSubscriber = Rc<dyn Fn()>;

/// Single owner of the editor state. Handed to components explicitly; there
/// is no ambient global to reach for.
pub(crate) struct PortfolioStore {
    state: RefCell<EditorState>,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl PortfolioStore {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(EditorState::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn dispatch(&self, action: EditorAction) {
        let next = {
            let state = self.state.borrow();
            reduce(&state, &action)
        };
        *self.state.borrow_mut() = next;
        self.notify();
    }

    pub(crate) fn snapshot(&self) -> EditorState {
        self.state.borrow().clone()
    }

    /// Resolves the selected template, falling back to the catalog's first
    /// entry when the id has no match.
    pub(crate) fn selected_template(&self) -> &'static Template {
        let state = self.state.borrow();
        state
            .selected_template_id
            .as_deref()
            .and_then(template_by_id)
            .unwrap_or(&TEMPLATE_CATALOG[0])
    }

    pub(crate) fn subscribe(&self, subscriber: StoreSubscriber) -> StoreSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        StoreSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

/// Keeps the subscriber registered for as long as the guard lives.
pub(crate) struct StoreSubscription {
    subscriber: StoreSubscriber,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use foliolab_core::SectionId;

    #[test]
    fn dispatch_replaces_state_and_notifies() {
        let store = PortfolioStore::new();
        let fired = Rc::new(Cell::new(0u32));
        let fired_in_hook = fired.clone();
        let subscription = store.subscribe(Rc::new(move || {
            fired_in_hook.set(fired_in_hook.get() + 1);
        }));
        store.dispatch(EditorAction::TogglePreviewMode { preview: true });
        assert!(store.snapshot().preview_mode);
        assert_eq!(fired.get(), 1);
        drop(subscription);
        store.dispatch(EditorAction::TogglePreviewMode { preview: false });
        assert_eq!(fired.get(), 1, "dropped subscription must not fire");
    }

    #[test]
    fn snapshot_is_detached_from_the_store() {
        let store = PortfolioStore::new();
        let snapshot = store.snapshot();
        store.dispatch(EditorAction::ToggleModal {
            open: true,
            section: Some(Some(SectionId::Skills)),
        });
        assert!(!snapshot.modal_open);
        assert!(store.snapshot().modal_open);
    }

    #[test]
    fn unknown_template_id_falls_back_to_first_entry() {
        let store = PortfolioStore::new();
        store.dispatch(EditorAction::SelectTemplate {
            template_id: "nonexistent-9".to_string(),
        });
        assert_eq!(
            store.snapshot().selected_template_id.as_deref(),
            Some("nonexistent-9")
        );
        assert_eq!(store.selected_template().id, TEMPLATE_CATALOG[0].id);
    }

    #[test]
    fn selected_template_tracks_the_selection() {
        let store = PortfolioStore::new();
        store.dispatch(EditorAction::SelectTemplate {
            template_id: "minimal-1".to_string(),
        });
        assert_eq!(store.selected_template().name, "Pure");
    }
}
