use std::rc::Rc;

use yew::prelude::*;

use crate::notice::Notice;
use crate::store::PortfolioStore;
use foliolab_core::{EditorAction, EditorState, Portfolio, SectionId, TemplateKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DeviceView {
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceView {
    const ALL: [DeviceView; 3] = [DeviceView::Desktop, DeviceView::Tablet, DeviceView::Mobile];

    fn label(self) -> &'static str {
        match self {
            DeviceView::Desktop => "Desktop",
            DeviceView::Tablet => "Tablet",
            DeviceView::Mobile => "Mobile",
        }
    }

    fn max_width(self) -> Option<&'static str> {
        match self {
            DeviceView::Desktop => None,
            DeviceView::Tablet => Some("768px"),
            DeviceView::Mobile => Some("390px"),
        }
    }
}

#[derive(Properties)]
pub(crate) struct PortfolioPreviewProps {
    pub(crate) store: Rc<PortfolioStore>,
    pub(crate) snapshot: EditorState,
    pub(crate) on_notice: Callback<Notice>,
}

impl PartialEq for PortfolioPreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.snapshot == other.snapshot
            && self.on_notice == other.on_notice
    }
}

#[function_component(PortfolioPreview)]
pub(crate) fn portfolio_preview(props: &PortfolioPreviewProps) -> Html {
    let active_view = use_state(|| DeviceView::Desktop);
    let active_view_value = *active_view;

    let device_tabs: Html = DeviceView::ALL
        .into_iter()
        .map(|view| {
            let active_view = active_view.clone();
            let active = active_view_value == view;
            let onclick = Callback::from(move |_| active_view.set(view));
            html! {
                <button class={classes!("tab", active.then_some("tab-active"))} {onclick}>
                    { view.label() }
                </button>
            }
        })
        .collect();

    let on_export = {
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            on_notice.emit(Notice::new(
                "Export Feature",
                "The export feature will be available in the next version.",
            ));
        })
    };
    let on_share = {
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            on_notice.emit(Notice::new(
                "Share Feature",
                "The share feature will be available in the next version.",
            ));
        })
    };
    let on_edit = {
        let store = props.store.clone();
        Callback::from(move |_| {
            store.dispatch(EditorAction::ToggleModal {
                open: true,
                section: Some(Some(SectionId::Personal)),
            });
        })
    };

    let frame_style = active_view_value
        .max_width()
        .map(|width| format!("max-width: {width}; margin: 0 auto;"))
        .unwrap_or_default();
    let skin = render_template_skin(
        props.store.selected_template().kind,
        &props.snapshot.portfolio,
    );

    html! {
        <div class="portfolio-preview">
            <div class="preview-header">
                <div>
                    <h2>{ "Portfolio Preview" }</h2>
                    <p class="muted">
                        { "This is how your portfolio will look based on your information and selected template." }
                    </p>
                </div>
                <div class="preview-actions">
                    <button class="button button-outline" onclick={on_export}>{ "Export" }</button>
                    <button class="button button-outline" onclick={on_share}>{ "Share" }</button>
                </div>
            </div>
            <div class="preview-toolbar">
                <div class="tabs">{ device_tabs }</div>
                <button class="button button-ghost" onclick={on_edit}>{ "Edit Content" }</button>
            </div>
            <div class="preview-frame" style={frame_style}>
                { skin }
            </div>
        </div>
    }
}

/// Creative and Professional previews are not implemented yet; they render
/// with the modern skin.
pub(crate) fn render_template_skin(kind: TemplateKind, portfolio: &Portfolio) -> Html {
    match kind {
        TemplateKind::Minimal => minimal_template(portfolio),
        _ => modern_template(portfolio),
    }
}

fn modern_template(portfolio: &Portfolio) -> Html {
    let extra_experience = portfolio.experience.len().saturating_sub(1);
    html! {
        <div class="skin skin-modern">
            <div class="skin-hero">
                <span class="skin-eyebrow">{ "Portfolio" }</span>
                <h1>{ &portfolio.personal.full_name }</h1>
                <p class="skin-title">{ &portfolio.personal.title }</p>
                <p class="skin-bio">{ &portfolio.personal.bio }</p>
            </div>
            <div class="skin-columns">
                <section>
                    <h2>{ "About" }</h2>
                    <ul class="skin-about">
                        <li><span>{ "Email:" }</span>{ &portfolio.personal.email }</li>
                        <li><span>{ "Phone:" }</span>{ &portfolio.personal.phone }</li>
                        <li><span>{ "Location:" }</span>{ &portfolio.personal.location }</li>
                    </ul>
                </section>
                <section>
                    <h2>{ "Experience" }</h2>
                    if let Some(exp) = portfolio.experience.first() {
                        <div class="skin-experience">
                            <h3>{ &exp.position }</h3>
                            <p class="muted">{ &exp.company }</p>
                            <p class="skin-dates">{ format!("{} - {}", exp.start_date, exp.end_date) }</p>
                            <p>{ &exp.description }</p>
                        </div>
                        if extra_experience > 0 {
                            <p class="skin-more">{ format!("+ {extra_experience} more experiences") }</p>
                        }
                    } else {
                        <p class="muted-italic">{ "No experience added yet" }</p>
                    }
                </section>
            </div>
            <section class="skin-section">
                <h2>{ "Skills" }</h2>
                <div class="skin-chips">
                    { for portfolio.skills.iter().map(|skill| html! {
                        <span class="skin-chip" key={skill.id.clone()}>{ &skill.name }</span>
                    }) }
                </div>
            </section>
            <section class="skin-section">
                <h2>{ "Projects" }</h2>
                if portfolio.projects.is_empty() {
                    <p class="muted-italic">{ "No projects added yet" }</p>
                } else {
                    <div class="skin-project-grid">
                        { for portfolio.projects.iter().map(|project| html! {
                            <div class="skin-project" key={project.id.clone()}>
                                <div class="skin-project-image">{ "Project Image" }</div>
                                <div class="skin-project-body">
                                    <h3>{ &project.title }</h3>
                                    <p class="muted">{ &project.description }</p>
                                    <div class="skin-tags">
                                        { for project.tags.iter().take(3).map(|tag| html! {
                                            <span class="skin-tag">{ tag }</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                }
            </section>
        </div>
    }
}

fn minimal_template(portfolio: &Portfolio) -> Html {
    html! {
        <div class="skin skin-minimal">
            <header class="skin-minimal-header">
                <h1>{ &portfolio.personal.full_name }</h1>
                <p class="skin-title">{ &portfolio.personal.title }</p>
                <p class="skin-bio">{ &portfolio.personal.bio }</p>
            </header>
            <main>
                <section class="skin-minimal-section">
                    <h2>{ "About" }</h2>
                    <p><span>{ "Email: " }</span>{ &portfolio.personal.email }</p>
                    <p><span>{ "Phone: " }</span>{ &portfolio.personal.phone }</p>
                    <p><span>{ "Location: " }</span>{ &portfolio.personal.location }</p>
                </section>
                <section class="skin-minimal-section">
                    <h2>{ "Experience" }</h2>
                    if portfolio.experience.is_empty() {
                        <p class="muted-italic">{ "No experience added yet" }</p>
                    } else {
                        { for portfolio.experience.iter().take(2).map(|exp| html! {
                            <div class="skin-minimal-entry" key={exp.id.clone()}>
                                <h3>{ &exp.position }</h3>
                                <p class="muted">{ &exp.company }</p>
                                <p class="skin-dates">{ format!("{} - {}", exp.start_date, exp.end_date) }</p>
                                <p>{ &exp.description }</p>
                            </div>
                        }) }
                    }
                </section>
                <section class="skin-minimal-section">
                    <h2>{ "Skills" }</h2>
                    <div class="skin-chips">
                        { for portfolio.skills.iter().map(|skill| html! {
                            <span class="skin-chip skin-chip-outline" key={skill.id.clone()}>{ &skill.name }</span>
                        }) }
                    </div>
                </section>
            </main>
        </div>
    }
}
