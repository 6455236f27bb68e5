#![allow(non_snake_case)]

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    platform::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("apod_app UI is only available in the browser (build for wasm32).");
}
