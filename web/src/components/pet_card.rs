use leptos::prelude::*;

use crate::config::FrontendConfig;
use crate::types::Pet;

/// One pet as a tile on the vendor's pets page.
#[component]
pub fn PetCard(pet: Pet, config: FrontendConfig) -> impl IntoView {
    let image_src = config.image_url(&pet.image);

    view! {
        <div class="card" style="width: 18rem; float: left; margin: 10px;">
            <img
                class="card-img-top"
                src=image_src
                style="width: 18rem; height: 18rem; object-fit: cover;"
                alt=pet.name.clone()
            />
            <div class="card-body">
                <h5 class="card-title">{pet.name}</h5>
            </div>
        </div>
    }
}
