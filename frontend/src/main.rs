mod components;

use components::header::Header;
use web_sys::Element;

const MOUNT_ID: &str = "header-root";

fn mount_point() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(MOUNT_ID)
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");

    match mount_point() {
        Some(root) => {
            log::info!("Mounting header into #{}", MOUNT_ID);
            yew::Renderer::<Header>::with_root(root).render();
        }
        None => {
            log::warn!("#{} not found, mounting header into <body>", MOUNT_ID);
            yew::Renderer::<Header>::new().render();
        }
    }
}
