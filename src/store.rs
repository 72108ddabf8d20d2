//! Page UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. A fresh store is
//! provided by every page shell, so nothing survives navigation.

use leptos::prelude::*;
use reactive_stores::Store;

/// Overlay toggle and the highlighted menu category
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Fullscreen navigation overlay is open
    pub menu_open: bool,
    /// Section id highlighted in the category nav (menu page only)
    pub active_category: String,
}

impl UiState {
    pub fn new(active_category: &str) -> Self {
        Self {
            menu_open: false,
            active_category: active_category.to_string(),
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Create the page's store and provide it to the page's children
pub fn provide_ui_store(active_category: &str) -> UiStore {
    let store = Store::new(UiState::new(active_category));
    provide_context(store);
    store
}

/// Get the page store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_menu(store: &UiStore) {
    store.menu_open().update(|open| *open = !*open);
}

/// Called by every overlay link before navigating
pub fn store_close_menu(store: &UiStore) {
    store.menu_open().set(false);
}

pub fn store_set_active_category(store: &UiStore, id: String) {
    if store.active_category().get_untracked() != id {
        store.active_category().set(id);
    }
}
