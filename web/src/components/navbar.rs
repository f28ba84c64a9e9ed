use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="brand">"Pet Clinic"</A>
            <A href="/vendors">"Vendors"</A>
        </nav>
    }
}
