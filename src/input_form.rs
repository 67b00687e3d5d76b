use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::notice::Notice;
use crate::scroll_reveal::{apply_animation, AnimationVariant, DEFAULT_DURATION_MS};
use crate::store::PortfolioStore;
use foliolab_core::{EditorAction, EditorState, PersonalInfo, Portfolio, SectionId};

fn section_copy(section: SectionId) -> (&'static str, &'static str) {
    match section {
        SectionId::Personal => (
            "Personal Information",
            "Tell visitors who you are and how to reach you.",
        ),
        SectionId::Experience => (
            "Work Experience",
            "List the roles that shaped your career.",
        ),
        SectionId::Education => ("Education", "Add your degrees and certifications."),
        SectionId::Skills => ("Skills", "Show off what you are good at."),
        SectionId::Projects => ("Projects", "Showcase your best work."),
        SectionId::Testimonials => (
            "Testimonials",
            "Let clients and colleagues vouch for you.",
        ),
        SectionId::Social => ("Social Links", "Point visitors to your profiles."),
    }
}

#[derive(Properties)]
pub(crate) struct InputFormProps {
    pub(crate) store: Rc<PortfolioStore>,
    pub(crate) snapshot: EditorState,
    pub(crate) on_notice: Callback<Notice>,
}

impl PartialEq for InputFormProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.snapshot == other.snapshot
            && self.on_notice == other.on_notice
    }
}

/// Modal editor over a draft copy of the portfolio. Nothing reaches the
/// store until Save dispatches the whole draft.
#[function_component(InputForm)]
pub(crate) fn input_form(props: &InputFormProps) -> Html {
    let draft = use_state(Portfolio::default);
    let panel_ref = use_node_ref();
    let open = props.snapshot.modal_open;
    let section = props.snapshot.current_section.unwrap_or(SectionId::Personal);

    // Re-seed the draft from the store each time the modal opens, so stale
    // edits from a cancelled session never leak in.
    {
        let draft = draft.clone();
        let portfolio = props.snapshot.portfolio.clone();
        use_effect_with(open, move |open| {
            if *open {
                draft.set(portfolio);
            }
        });
    }

    {
        let panel_ref = panel_ref.clone();
        use_effect_with(open, move |open| {
            if !*open {
                return;
            }
            let Some(panel) = panel_ref.cast::<HtmlElement>() else {
                return;
            };
            spawn_local(async move {
                apply_animation(&panel, AnimationVariant::Scale, true, DEFAULT_DURATION_MS, 0)
                    .await;
            });
        });
    }

    if !open {
        return html! {};
    }

    let on_save = {
        let store = props.store.clone();
        let on_notice = props.on_notice.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            store.dispatch(EditorAction::LoadPortfolio {
                portfolio: (*draft).clone(),
            });
            store.dispatch(EditorAction::ToggleModal {
                open: false,
                section: None,
            });
            on_notice.emit(Notice::new(
                "Changes Saved",
                "Your portfolio has been updated.",
            ));
        })
    };
    let on_cancel = {
        let store = props.store.clone();
        let draft = draft.clone();
        let portfolio = props.snapshot.portfolio.clone();
        Callback::from(move |_| {
            draft.set(portfolio.clone());
            store.dispatch(EditorAction::ToggleModal {
                open: false,
                section: None,
            });
        })
    };

    // The tabs carry the section key as a data attribute; one shared handler
    // decodes it back. Keys that fail to decode leave the modal untouched.
    let on_section = {
        let store = props.store.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(tab) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let key = tab.get_attribute("data-section").unwrap_or_default();
            let Some(section) = SectionId::from_key(&key) else {
                return;
            };
            store.dispatch(EditorAction::ToggleModal {
                open: true,
                section: Some(Some(section)),
            });
        })
    };
    let section_tabs: Html = SectionId::ALL
        .into_iter()
        .map(|candidate| {
            let active = candidate == section;
            html! {
                <button
                    class={classes!("tab", active.then_some("tab-active"))}
                    data-section={candidate.as_str()}
                    onclick={on_section.clone()}
                >
                    { section_copy(candidate).0 }
                </button>
            }
        })
        .collect();

    let (title, blurb) = section_copy(section);
    let body = match section {
        SectionId::Personal => personal_fields(&draft),
        other => html! {
            <p class="muted-italic">
                { format!("Editing for the {} section is coming soon. Your current entries are kept as they are.", section_copy(other).0.to_lowercase()) }
            </p>
        },
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-panel" ref={panel_ref}>
                <div class="modal-header">
                    <h2>{ title }</h2>
                    <p class="muted">{ blurb }</p>
                </div>
                <div class="modal-tabs">{ section_tabs }</div>
                <div class="modal-body">{ body }</div>
                <div class="modal-footer">
                    <button class="button button-outline" onclick={on_cancel}>{ "Cancel" }</button>
                    <button class="button" onclick={on_save}>{ "Save Changes" }</button>
                </div>
            </div>
        </div>
    }
}

fn personal_fields(draft: &UseStateHandle<Portfolio>) -> Html {
    html! {
        <div class="form-grid">
            { text_field(draft, "Full Name", |p| p.full_name.clone(), |p, v| p.full_name = v) }
            { text_field(draft, "Professional Title", |p| p.title.clone(), |p, v| p.title = v) }
            { text_field(draft, "Email", |p| p.email.clone(), |p, v| p.email = v) }
            { text_field(draft, "Phone", |p| p.phone.clone(), |p, v| p.phone = v) }
            { text_field(draft, "Location", |p| p.location.clone(), |p, v| p.location = v) }
            { bio_field(draft) }
        </div>
    }
}

fn text_field(
    draft: &UseStateHandle<Portfolio>,
    label: &'static str,
    get: fn(&PersonalInfo) -> String,
    set: fn(&mut PersonalInfo, String),
) -> Html {
    let value = get(&draft.personal);
    let draft = draft.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let mut next = (*draft).clone();
        set(&mut next.personal, input.value());
        draft.set(next);
    });
    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input type="text" {value} {oninput} />
        </label>
    }
}

fn bio_field(draft: &UseStateHandle<Portfolio>) -> Html {
    let value = draft.personal.bio.clone();
    let draft = draft.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        let Some(area) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
        else {
            return;
        };
        let mut next = (*draft).clone();
        next.personal.bio = area.value();
        draft.set(next);
    });
    html! {
        <label class="form-field form-field-wide">
            <span>{ "Bio" }</span>
            <textarea rows="4" {value} {oninput} />
        </label>
    }
}
