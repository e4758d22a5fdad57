// Trunk entry point: renders the project page once the wasm module loads.

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn main() {
    labpage_web::start();
}
