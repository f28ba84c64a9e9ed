use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::FrontendConfig;
use crate::types::Vendor;

/// One vendor as a card: thumbnail, name, pet count and a link to all of the
/// vendor's pets. Pure render, the vendor data stays untouched and navigation
/// is left to the router.
#[component]
pub fn VendorCard(vendor: Vendor, config: FrontendConfig) -> impl IntoView {
    let image_src = config.image_url(vendor.card_image());
    let pets_href = vendor.pets_path();
    let pet_count = vendor.pets.len();
    let name = vendor.name;

    view! {
        <div class="card" style="width: 18rem; float: left; margin: 10px;">
            <img
                class="card-img-top"
                src=image_src
                style="width: 18rem; height: 18rem; object-fit: cover;"
                alt=name.clone()
            />
            <div class="card-body">
                <h5 class="card-title">{name}</h5>
                <p class="card-text">"Pets: " {pet_count}</p>
                <A href=pets_href attr:class="btn btn-primary">"See all Pets"</A>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::types::Pet;
    use leptos_router::components::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// fresh mount point per test, the page body is shared between tests
    fn mount_host() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let host: web_sys::HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn example_config() -> FrontendConfig {
        FrontendConfig {
            server_url: "https://api.example.com".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn should_render_card_fragment() {
        let host = mount_host();
        let config = example_config();
        let vendor = Vendor {
            name: "Acme Farm".to_string(),
            pets: vec![
                Pet {
                    name: "Rex".to_string(),
                    image: "dog1.jpg".to_string(),
                },
                Pet {
                    name: "Bella".to_string(),
                    image: "dog2.jpg".to_string(),
                },
            ],
        };

        leptos::mount::mount_to(host.clone(), move || {
            view! {
                <Router>
                    <VendorCard vendor config />
                </Router>
            }
        })
        .forget();

        let img = host.query_selector("img.card-img-top").unwrap().unwrap();
        assert_eq!(
            "https://api.example.com/images/dog1.jpg",
            img.get_attribute("src").unwrap()
        );
        assert_eq!("Acme Farm", img.get_attribute("alt").unwrap());

        let title = host.query_selector(".card-title").unwrap().unwrap();
        assert_eq!("Acme Farm", title.text_content().unwrap());

        let text = host.query_selector(".card-text").unwrap().unwrap();
        assert_eq!("Pets: 2", text.text_content().unwrap());

        let link = host.query_selector("a.btn").unwrap().unwrap();
        assert_eq!("/pets/vendor/Acme Farm", link.get_attribute("href").unwrap());
        assert_eq!("See all Pets", link.text_content().unwrap());
    }

    #[wasm_bindgen_test]
    fn should_render_fallback_image_for_petless_vendor() {
        let host = mount_host();
        let config = example_config();
        let vendor = Vendor {
            name: "Empty Vendor".to_string(),
            pets: vec![],
        };

        leptos::mount::mount_to(host.clone(), move || {
            view! {
                <Router>
                    <VendorCard vendor config />
                </Router>
            }
        })
        .forget();

        let img = host.query_selector("img.card-img-top").unwrap().unwrap();
        assert_eq!(
            "https://api.example.com/images/missing.png",
            img.get_attribute("src").unwrap()
        );

        let text = host.query_selector(".card-text").unwrap().unwrap();
        assert_eq!("Pets: 0", text.text_content().unwrap());
    }
}
