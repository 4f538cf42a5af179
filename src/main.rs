#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;
// The interactive core is DOM-free so the native target can unit test it;
// outside of tests only the wasm frontend drives it.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod interaction;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
