use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{EmptyState, Loading, PetCard};
use crate::config::FrontendConfig;

/// Target of a vendor card's "See all Pets" link.
#[component]
pub fn VendorPetsPage() -> impl IntoView {
    let params = use_params_map();
    let vendor_name = move || params.read().get("name").unwrap_or_default();

    let config = expect_context::<FrontendConfig>();

    let fetch_config = config.clone();
    let pets = LocalResource::new(move || {
        let config = fetch_config.clone();
        let name = vendor_name();
        async move { api::fetch_vendor_pets(&config, &name).await }
    });

    view! {
        <div class="container">
            <A href="/vendors" attr:class="back-link">"← Back to vendors"</A>
            <h1>{vendor_name}</h1>
            <Suspense fallback=Loading>
                {move || {
                    let config = config.clone();
                    Suspend::new(async move {
                        match pets.await {
                            Ok(pet_list) => {
                                if pet_list.is_empty() {
                                    view! { <EmptyState message="This vendor has no pets yet." /> }.into_any()
                                } else {
                                    view! {
                                        <div class="card-list">
                                            {pet_list.into_iter().map(|pet| {
                                                let config = config.clone();
                                                view! { <PetCard pet config /> }
                                            }).collect_view()}
                                        </div>
                                    }.into_any()
                                }
                            }
                            Err(e) => {
                                log::error!("failed to load pets: {}", e);
                                view! { <div class="message message-error">"Error: " {e}</div> }.into_any()
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
