use shared::LogoImage;
use shared::style::{Slot, class_list};
use yew::prelude::*;

/// Renders the logo image with its fixed size and load-priority hint
pub fn render_logo(image: &LogoImage) -> Html {
    let loading = if image.priority { "eager" } else { "lazy" };
    let fetch_priority = image.priority.then_some(AttrValue::Static("high"));

    html! {
        <img
            class={class_list(Slot::Logo)}
            src={image.src}
            alt={image.alt}
            width={image.width.to_string()}
            height={image.height.to_string()}
            loading={loading}
            fetchpriority={fetch_priority}
            decoding="async"
        />
    }
}
