use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod config;
mod pages;
mod types;

use config::FrontendConfig;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_context(FrontendConfig::from_env());

    view! {
        <Router>
            <components::Navbar />
            <main>
                <Routes fallback=|| view! { <div class="container"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=pages::VendorsPage />
                    <Route path=path!("/vendors") view=pages::VendorsPage />
                    <Route path=path!("/pets/vendor/:name") view=pages::VendorPetsPage />
                </Routes>
            </main>
        </Router>
    }
}
