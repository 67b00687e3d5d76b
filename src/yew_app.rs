use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use crate::input_form::InputForm;
use crate::notice::{Notice, NoticeBoard, NoticeStack};
use crate::portfolio_preview::{render_template_skin, PortfolioPreview};
use crate::scroll_reveal::{
    AnimationVariant, ScrollReveal, DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD,
};
use crate::store::PortfolioStore;
use crate::template_selector::TemplateSelector;
use foliolab_core::EditorAction;

const FEATURES: &[(&str, &str)] = &[
    (
        "Beautiful Templates",
        "Choose from a range of professionally designed templates to showcase your work.",
    ),
    (
        "Easy Customization",
        "Customize colors, fonts, and layouts to match your personal brand and style.",
    ),
    (
        "Responsive Design",
        "Your portfolio will look great on all devices, from desktops to smartphones.",
    ),
    (
        "Content Management",
        "Easily update your information, projects, and skills as you grow professionally.",
    ),
    (
        "Export Options",
        "Download your portfolio as PDF or HTML to share it with potential clients or employers.",
    ),
    (
        "Smart Suggestions",
        "Get AI-powered recommendations to improve your portfolio content and presentation.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Choose a Template",
        "Select from our collection of professionally designed portfolio templates.",
    ),
    (
        "Add Your Content",
        "Fill in your information, work experience, projects, and skills.",
    ),
    (
        "Publish & Share",
        "Preview your portfolio, make any adjustments, and share it with the world.",
    ),
];

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) store: Rc<PortfolioStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let snapshot = use_state(|| props.store.snapshot());
    {
        let store = props.store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(Rc::new({
                let store = store.clone();
                move || snapshot.set(store.snapshot())
            }));
            move || drop(subscription)
        });
    }

    let notices = use_state(Vec::<(u64, Notice)>::new);
    let notice_live = use_mut_ref(Vec::<(u64, Notice)>::new);
    let notice_seq = use_memo((), |_| Cell::new(0u64));
    let board = NoticeBoard::new(notices.clone(), notice_live, notice_seq);
    let on_notice = {
        let board = board.clone();
        Callback::from(move |notice: Notice| board.push(notice))
    };
    let on_dismiss = {
        let board = board.clone();
        Callback::from(move |id: u64| board.dismiss(id))
    };

    // Re-arm the reveal observer whenever the page swaps, so freshly mounted
    // sections animate in once.
    {
        let preview = snapshot.preview_mode;
        use_effect_with(preview, move |_| {
            let reveal = ScrollReveal::observe(
                ".scroll-reveal",
                AnimationVariant::SlideUp,
                DEFAULT_THRESHOLD,
                DEFAULT_ROOT_MARGIN,
            );
            if reveal.is_none() {
                gloo::console::warn!("scroll reveal observer unavailable");
            }
            move || drop(reveal)
        });
    }

    let page = if snapshot.preview_mode {
        preview_page(props, &snapshot)
    } else {
        builder_page(props, &snapshot, &on_notice)
    };

    html! {
        <div class="app-shell">
            <Navbar store={props.store.clone()} snapshot={(*snapshot).clone()} on_notice={on_notice.clone()} />
            { page }
            <InputForm store={props.store.clone()} snapshot={(*snapshot).clone()} on_notice={on_notice.clone()} />
            <NoticeStack notices={(*notices).clone()} {on_dismiss} />
        </div>
    }
}

fn builder_page(
    props: &AppProps,
    snapshot: &UseStateHandle<foliolab_core::EditorState>,
    on_notice: &Callback<Notice>,
) -> Html {
    let steps: Html = STEPS
        .iter()
        .enumerate()
        .map(|(index, (title, copy))| {
            html! {
                <div class="step scroll-reveal" key={*title}>
                    <div class="step-number">{ index + 1 }</div>
                    <h3>{ *title }</h3>
                    <p class="muted">{ *copy }</p>
                </div>
            }
        })
        .collect();
    let features: Html = FEATURES
        .iter()
        .map(|(title, copy)| {
            html! {
                <div class="feature-card scroll-reveal" key={*title}>
                    <h3>{ *title }</h3>
                    <p class="muted">{ *copy }</p>
                </div>
            }
        })
        .collect();

    html! {
        <main class="builder-page">
            <section class="hero">
                <span class="hero-badge">{ "Portfolio Maker" }</span>
                <h1 class="animate-fade-in">
                    { "Create Your Professional" }
                    <br />
                    { "Portfolio in Minutes" }
                </h1>
                <p class="hero-copy animate-fade-in">
                    { "Showcase your skills, projects, and achievements with a beautifully designed portfolio website." }
                </p>
            </section>
            <section class="section section-alt">
                <div class="section-heading">
                    <h2 class="scroll-reveal">{ "How It Works" }</h2>
                    <p class="muted scroll-reveal">{ "Create a stunning portfolio in three simple steps." }</p>
                </div>
                <div class="step-grid">{ steps }</div>
            </section>
            <section class="section">
                <div class="section-heading">
                    <h2 class="scroll-reveal">{ "Choose Your Template" }</h2>
                    <p class="muted scroll-reveal">
                        { "Select from various styles to find the perfect showcase for your work." }
                    </p>
                </div>
                <TemplateSelector
                    store={props.store.clone()}
                    selected_template_id={snapshot.selected_template_id.clone()}
                    on_notice={on_notice.clone()}
                />
            </section>
            <section class="section section-alt">
                <div class="section-heading">
                    <h2 class="scroll-reveal">{ "Preview Your Portfolio" }</h2>
                    <p class="muted scroll-reveal">
                        { "See how your portfolio will look across different devices." }
                    </p>
                </div>
                <PortfolioPreview
                    store={props.store.clone()}
                    snapshot={(**snapshot).clone()}
                    on_notice={on_notice.clone()}
                />
            </section>
            <section class="section">
                <div class="section-heading">
                    <h2 class="scroll-reveal">{ "Powerful Features" }</h2>
                    <p class="muted scroll-reveal">
                        { "Everything you need to create a professional portfolio." }
                    </p>
                </div>
                <div class="feature-grid">{ features }</div>
            </section>
            <section class="cta">
                <h2 class="scroll-reveal">{ "Ready to Showcase Your Work?" }</h2>
                <p class="scroll-reveal">
                    { "Join thousands of professionals who use our platform to create stunning portfolios." }
                </p>
            </section>
            <footer class="footer">
                <p class="muted">{ "Built with FolioLab." }</p>
            </footer>
        </main>
    }
}

fn preview_page(props: &AppProps, snapshot: &UseStateHandle<foliolab_core::EditorState>) -> Html {
    let on_back = {
        let store = props.store.clone();
        Callback::from(move |_| store.dispatch(EditorAction::TogglePreviewMode { preview: false }))
    };
    html! {
        <main class="preview-page">
            <div class="preview-page-bar">
                <button class="button button-outline" onclick={on_back}>{ "Back to Editor" }</button>
            </div>
            { render_template_skin(props.store.selected_template().kind, &snapshot.portfolio) }
        </main>
    }
}

#[derive(Properties)]
struct NavbarProps {
    store: Rc<PortfolioStore>,
    snapshot: foliolab_core::EditorState,
    on_notice: Callback<Notice>,
}

impl PartialEq for NavbarProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && self.snapshot == other.snapshot
            && self.on_notice == other.on_notice
    }
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                EventListener::new(&window, "scroll", move |_| {
                    let offset = target.scroll_y().unwrap_or(0.0);
                    scrolled.set(offset > 10.0);
                })
            });
            move || drop(listener)
        });
    }

    let preview = props.snapshot.preview_mode;
    let on_toggle = {
        let store = props.store.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            store.dispatch(EditorAction::TogglePreviewMode { preview: !preview });
            let notice = if preview {
                Notice::new("Editing Mode", "You can now edit your portfolio.")
            } else {
                Notice::new("Preview Mode", "This is how your portfolio will look.")
            };
            on_notice.emit(notice);
        })
    };
    // Saving re-loads the current document, which acknowledges it as clean.
    let on_save = {
        let store = props.store.clone();
        let on_notice = props.on_notice.clone();
        let portfolio = props.snapshot.portfolio.clone();
        Callback::from(move |_| {
            store.dispatch(EditorAction::LoadPortfolio {
                portfolio: portfolio.clone(),
            });
            on_notice.emit(Notice::new(
                "Changes Saved",
                "Your portfolio has been updated.",
            ));
        })
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("navbar-scrolled"))}>
            <div class="navbar-brand">
                <span class="navbar-logo">{ "\u{2726}" }</span>
                <span class="navbar-name">{ "FolioLab" }</span>
            </div>
            <div class="navbar-actions">
                if props.snapshot.dirty {
                    <span class="navbar-dirty">{ "Unsaved changes" }</span>
                    <button class="button" onclick={on_save}>{ "Save" }</button>
                }
                if props.snapshot.selected_template_id.is_some() {
                    <button class="button button-outline" onclick={on_toggle}>
                        { if preview { "Edit" } else { "Preview" } }
                    </button>
                }
            </div>
        </nav>
    }
}
