mod app;
mod dom;
mod picker;
mod result_panel;
mod reveal;
mod submit;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        app::run();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("sakusen client is only supported on wasm32 targets");
    }
}
