mod input_form;
mod notice;
mod portfolio_preview;
mod scroll_reveal;
mod store;
mod template_selector;
mod yew_app;

use yew_app::{App, AppProps};

fn main() {
    gloo::console::log!("foliolab booting");
    let store = store::PortfolioStore::new();
    yew::Renderer::<App>::with_props(AppProps { store }).render();
}
