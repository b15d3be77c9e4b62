use super::logo::render_logo;
use shared::BrandConfig;
use shared::style::{Slot, class_list};
use yew::prelude::*;

/// Renders the branding header: site name and logo, linking to the site
pub fn render_header(brand: &BrandConfig) -> Html {
    html! {
        <div class={class_list(Slot::Frame)}>
            <div class={class_list(Slot::Banner)}>
                <a href={brand.site_url} class={class_list(Slot::Link)}>
                    <span>{ brand.site_name }</span>
                    { render_logo(&brand.logo) }
                </a>
            </div>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    render_header(&BrandConfig::ZEMELAH)
}
