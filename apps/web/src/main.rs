//! Browser entry point. The `logger` feature routes `tracing` output to the
//! console; configuration files are not read on wasm, so UI defaults apply.

use heritage::client::App;

fn main() {
    dioxus::launch(App);
}
