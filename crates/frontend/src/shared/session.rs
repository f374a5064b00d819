//! Browser-session id used to scope server-side state (IRPV table).
//!
//! Kept in `sessionStorage`: survives reloads of the tab, not new tabs.

const STORAGE_KEY: &str = "after_sales_session_id";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Existing id of this tab, or a freshly generated one.
pub fn session_id() -> String {
    if let Some(id) = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        if !id.is_empty() {
            return id;
        }
    }

    let id = uuid::Uuid::new_v4().to_string();
    if let Some(s) = storage() {
        if s.set_item(STORAGE_KEY, &id).is_err() {
            log::warn!("sessionStorage unavailable, IRPV results will not survive a reload");
        }
    }
    id
}
