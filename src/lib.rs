mod api;
mod app;
mod components;
mod listing;
mod models;
mod pages;
mod pricing;
mod session;
mod state;
mod storage;
mod util;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::ApiClient;
    use crate::models::{Role, User};
    use crate::storage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_storage_roundtrip() {
        storage::clear_session();

        let c = ApiClient::load_from_storage();
        assert!(!c.is_authenticated());

        storage::save_token("t1");
        let c2 = ApiClient::load_from_storage();
        assert_eq!(c2.token.as_deref(), Some("t1"));

        storage::clear_session();
        let c3 = ApiClient::load_from_storage();
        assert!(c3.token.is_none());
    }

    #[wasm_bindgen_test]
    fn cached_user_roundtrip() {
        let user = User {
            id: 1,
            email: "an@example.com".to_string(),
            full_name: "Nguyen Van An".to_string(),
            role: Role::Guest,
            phone: None,
            avatar: None,
            is_verified: false,
        };
        storage::save_cached_user(&user);
        let loaded = storage::load_cached_user().expect("should load user from localStorage");
        assert_eq!(loaded.email, "an@example.com");

        storage::clear_session();
        assert!(storage::load_cached_user().is_none());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
