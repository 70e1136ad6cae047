#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;
    use shakti_ui::App;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}

// The dashboard only runs in the browser; native builds exist for tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
