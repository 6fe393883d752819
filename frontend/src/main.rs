use lexia_site::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("lexia site starting ({:?})", config::environment());
    yew::Renderer::<App>::new().render();
}
