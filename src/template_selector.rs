use std::rc::Rc;

use yew::prelude::*;

use crate::notice::Notice;
use crate::store::PortfolioStore;
use foliolab_core::{EditorAction, Template, TemplateKind, TEMPLATE_CATALOG};

#[derive(Properties)]
pub(crate) struct TemplateSelectorProps {
    pub(crate) store: Rc<PortfolioStore>,
    pub(crate) selected_template_id: Option<String>,
    pub(crate) on_notice: Callback<Notice>,
}

impl PartialEq for TemplateSelectorProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.selected_template_id == other.selected_template_id
            && self.on_notice == other.on_notice
    }
}

fn kind_label(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Modern => "Modern",
        TemplateKind::Minimal => "Minimal",
        TemplateKind::Creative => "Creative",
        TemplateKind::Professional => "Professional",
    }
}

#[function_component(TemplateSelector)]
pub(crate) fn template_selector(props: &TemplateSelectorProps) -> Html {
    let filter = use_state(|| None::<TemplateKind>);
    let filter_value = *filter;

    let filter_buttons: Html = std::iter::once(html! {
        <button
            class={classes!("chip", filter_value.is_none().then_some("chip-active"))}
            onclick={{
                let filter = filter.clone();
                Callback::from(move |_| filter.set(None))
            }}
        >
            { "All" }
        </button>
    })
    .chain(TemplateKind::ALL.into_iter().map(|kind| {
        let filter = filter.clone();
        let active = filter_value == Some(kind);
        let onclick = Callback::from(move |_| filter.set(Some(kind)));
        html! {
            <button class={classes!("chip", active.then_some("chip-active"))} {onclick}>
                { kind_label(kind) }
            </button>
        }
    }))
    .collect();

    let cards: Html = TEMPLATE_CATALOG
        .iter()
        .filter(|template| filter_value.is_none() || filter_value == Some(template.kind))
        .map(|template| template_card(props, template))
        .collect();

    html! {
        <div class="template-selector">
            <div class="template-filters">{ filter_buttons }</div>
            <div class="template-grid">{ cards }</div>
        </div>
    }
}

fn template_card(props: &TemplateSelectorProps, template: &'static Template) -> Html {
    let selected = props.selected_template_id.as_deref() == Some(template.id);
    let onclick = {
        let store = props.store.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            if template.premium {
                on_notice.emit(Notice::new(
                    "Premium Template",
                    "This is a premium template. Please upgrade to use it.",
                ));
                return;
            }
            store.dispatch(EditorAction::SelectTemplate {
                template_id: template.id.to_string(),
            });
            on_notice.emit(Notice::new(
                "Template Selected",
                format!("You've selected the {} template.", template.name),
            ));
        })
    };
    let button_label = if selected {
        "Selected"
    } else if template.premium {
        "Premium"
    } else {
        "Select"
    };
    html! {
        <div class={classes!("template-card", selected.then_some("template-card-selected"))} key={template.id}>
            <div class="template-thumb">
                <span class="template-thumb-name">{ template.name }</span>
                if template.premium {
                    <span class="template-badge">{ "Premium" }</span>
                }
                if selected {
                    <span class="template-selected-mark">{ "\u{2713}" }</span>
                }
            </div>
            <div class="template-meta">
                <h3>{ template.name }</h3>
                <p class="template-kind">{ kind_label(template.kind) }</p>
                <p class="template-description">{ template.description }</p>
                <button class={classes!("button", (!selected).then_some("button-outline"))} {onclick}>
                    { button_label }
                </button>
            </div>
        </div>
    }
}
