//! Entry point for the WASM application

pub fn main() {
    rotten_frontend::start();
}
