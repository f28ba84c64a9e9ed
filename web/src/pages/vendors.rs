use leptos::prelude::*;

use crate::api;
use crate::components::{EmptyState, Loading, VendorCard};
use crate::config::FrontendConfig;

#[component]
pub fn VendorsPage() -> impl IntoView {
    let config = expect_context::<FrontendConfig>();

    let fetch_config = config.clone();
    let vendors = LocalResource::new(move || {
        let config = fetch_config.clone();
        async move { api::fetch_vendors(&config).await }
    });

    view! {
        <div class="container">
            <h1>"Vendors"</h1>
            <Suspense fallback=Loading>
                {move || {
                    let config = config.clone();
                    Suspend::new(async move {
                        match vendors.await {
                            Ok(vendor_list) => {
                                if vendor_list.is_empty() {
                                    view! { <EmptyState message="No vendors registered yet." /> }.into_any()
                                } else {
                                    view! {
                                        <div class="card-list">
                                            {vendor_list.into_iter().map(|vendor| {
                                                let config = config.clone();
                                                view! { <VendorCard vendor config /> }
                                            }).collect_view()}
                                        </div>
                                    }.into_any()
                                }
                            }
                            Err(e) => {
                                log::error!("failed to load vendors: {}", e);
                                view! { <div class="message message-error">"Error: " {e}</div> }.into_any()
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
