//! Generates Swift and Kotlin bindings for the SnapSpot library.

fn main() {
    uniffi::uniffi_bindgen_main();
}
