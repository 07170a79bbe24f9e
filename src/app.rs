use leptos::*;
use wasm_bindgen::prelude::*;

use crate::auth::AuthPage;
use crate::browse::BrowsePage;
use crate::session;

/// Root component: the stored token gates the whole UI. No token means
/// the auth page; logging in stores one and flips straight to browsing.
#[component]
pub fn App() -> impl IntoView {
    let (token, set_token) = create_signal(session::stored_token());

    view! {
        <div class="app">
            <StyleProvider />
            <Show
                when=move || token.get().is_some()
                fallback=move || view! {
                    <AuthPage on_login=move |fresh: String| {
                        session::store_token(&fresh);
                        set_token.set(Some(fresh));
                    } />
                }
            >
                <BrowsePage
                    token=token
                    on_logout=move || {
                        session::clear_token();
                        set_token.set(None);
                    }
                />
            </Show>
        </div>
    }
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

// CSS-in-Rust: Catppuccin Mocha with labeled grid boxes
const MAIN_STYLES: &str = r#"
@import url("https://fonts.googleapis.com/css2?family=DM+Mono:ital,wght@0,300;0,400;0,500&display=swap");

body {
    font-family: "DM Mono", monospace;
    letter-spacing: -0.05ch;
    background-color: #1e1e2e;
    color: #cdd6f4;
    margin: 0;
    padding: 20px;
}

.app {
    max-width: 1200px;
    margin: 0 auto;
}

.border-container {
    position: relative;
    padding: 20px;
    border: 2px solid #45475a;
    transition: border-color 0.2s ease-out;
    background-color: #1e1e2e;
}

.border-container::before {
    position: absolute;
    top: -12px;
    left: 20px;
    background-color: #1e1e2e;
    padding: 0 8px;
    font-size: 14px;
    color: #45475a;
    transition: color 0.2s ease-out;
}

/* auth page */

.auth-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 20px;
    padding: 40px 20px;
    max-width: 480px;
    margin: 0 auto;
    min-height: 90vh;
    align-content: center;
}

.auth-header {
    text-align: center;
    padding: 30px;
}
.auth-header::before {
    content: "eduwise";
}
.auth-header:hover {
    border-color: #cba6f7;
}
.auth-header:hover::before {
    color: #cba6f7;
}

.auth-form-section {
    padding: 30px;
}
.auth-form-section::before {
    content: "authenticate";
}
.auth-form-section:hover {
    border-color: #89b4fa;
}
.auth-form-section:hover::before {
    color: #89b4fa;
}

.field-label {
    display: block;
    color: #cdd6f4;
    font-size: 14px;
    margin-bottom: 8px;
    text-transform: lowercase;
}

.auth-input {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 12px 16px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    transition: border-color 0.2s ease-out;
    box-sizing: border-box;
    margin-bottom: 16px;
}
.auth-input:focus {
    outline: none;
    border-color: #89b4fa;
}
.auth-input::placeholder {
    color: #6c7086;
    font-style: italic;
}

.auth-btn {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 12px 20px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
    text-transform: lowercase;
    margin-bottom: 10px;
}
.auth-btn:hover:not(:disabled) {
    border-color: #89b4fa;
}
.auth-btn:disabled {
    border-color: #313244;
    color: #6c7086;
    cursor: not-allowed;
}

.auth-link {
    background: none;
    border: none;
    color: #89b4fa;
    font-family: "DM Mono", monospace;
    font-size: 13px;
    cursor: pointer;
    display: block;
    margin: 6px auto 0 auto;
}
.auth-link:disabled {
    color: #6c7086;
    cursor: not-allowed;
}

.auth-error {
    color: #f38ba8;
    border: 2px solid #f38ba8;
    padding: 12px 16px;
    font-size: 13px;
    margin-top: 16px;
}

/* main page */

.main-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 20px;
    margin-bottom: 20px;
}
.main-header::before {
    content: "course materials";
}
.main-header:hover {
    border-color: #cba6f7;
}
.main-header:hover::before {
    color: #cba6f7;
}
.main-title {
    color: #cdd6f4;
    margin: 0;
    font-size: 2.4rem;
    font-weight: 500;
}

.search-bar {
    display: flex;
    gap: 16px;
    align-items: center;
    margin-bottom: 24px;
}

.search-input {
    flex: 1;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 12px 16px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    transition: border-color 0.2s ease-out;
    box-sizing: border-box;
}
.search-input:focus {
    outline: none;
    border-color: #fab387;
}
.search-input::placeholder {
    color: #6c7086;
}

.toggle-upload-btn {
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 12px 18px;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
    text-transform: lowercase;
    white-space: nowrap;
}
.toggle-upload-btn:hover {
    border-color: #a6e3a1;
}

.records-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 20px;
}

.record-card {
    display: block;
    text-decoration: none;
    padding: 24px 20px;
    text-align: center;
    color: #cdd6f4;
}
.record-card::before {
    content: "file";
}
.record-card:hover {
    border-color: #f38ba8;
}
.record-card:hover::before {
    color: #f38ba8;
}
.record-course {
    color: #cdd6f4;
    font-size: 16px;
    font-weight: 500;
    margin: 0 0 6px 0;
}
.record-type {
    color: #fab387;
    font-size: 12px;
    text-transform: uppercase;
    margin: 0 0 8px 0;
}
.record-meta {
    color: #a6adc8;
    font-size: 12px;
    margin: 2px 0;
}

.empty-state {
    text-align: center;
    padding: 40px 20px;
    color: #bac2de;
}

.pagination {
    display: flex;
    justify-content: center;
    gap: 6px;
    margin-top: 28px;
}
.page-btn {
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 8px 14px;
    font-family: "DM Mono", monospace;
    font-size: 13px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
}
.page-btn:hover:not(:disabled) {
    border-color: #89b4fa;
}
.page-btn:disabled {
    border-color: #313244;
    color: #6c7086;
    cursor: not-allowed;
}
.page-btn.current {
    border-color: #89b4fa;
    color: #89b4fa;
}

/* profile menu */

.profile-menu {
    position: relative;
}
.profile-btn {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    background-color: #313244;
    border: 2px solid #45475a;
    color: #cdd6f4;
    font-family: "DM Mono", monospace;
    font-size: 18px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
}
.profile-btn:hover {
    border-color: #cba6f7;
}
.profile-dropdown {
    position: absolute;
    right: 0;
    top: 56px;
    min-width: 220px;
    padding: 16px;
    z-index: 40;
    text-align: left;
}
.profile-dropdown::before {
    content: "profile";
}
.profile-name {
    color: #a6adc8;
    font-size: 13px;
    margin: 0 0 12px 0;
    word-break: break-all;
}
.profile-logout {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #f38ba8;
    padding: 8px 12px;
    font-family: "DM Mono", monospace;
    font-size: 13px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
}
.profile-logout:hover {
    border-color: #f38ba8;
}

/* upload overlay and form */

.upload-overlay {
    position: fixed;
    inset: 0;
    background-color: rgba(17, 17, 27, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
    padding: 20px;
}

.upload-form {
    width: 100%;
    max-width: 640px;
    padding: 30px;
    max-height: 90vh;
    overflow-y: auto;
}
.upload-form::before {
    content: "upload course material";
}
.upload-form:hover {
    border-color: #a6e3a1;
}
.upload-form:hover::before {
    color: #a6e3a1;
}

.form-row {
    display: flex;
    gap: 16px;
    margin-bottom: 16px;
}
.form-field {
    flex: 1;
    min-width: 0;
}

.upload-input,
.type-select {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 10px 12px;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    transition: border-color 0.2s ease-out;
    box-sizing: border-box;
}
.upload-input:focus,
.type-select:focus {
    outline: none;
    border-color: #a6e3a1;
}

.file-input {
    width: 100%;
    color: #a6adc8;
    font-family: "DM Mono", monospace;
    font-size: 13px;
}

.upload-submit-btn {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 12px 20px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
    text-transform: lowercase;
    margin-top: 10px;
}
.upload-submit-btn:hover:not(:disabled) {
    border-color: #a6e3a1;
}
.upload-submit-btn:disabled {
    border-color: #313244;
    color: #6c7086;
    cursor: not-allowed;
}

.close-btn {
    float: right;
    background: none;
    border: none;
    color: #6c7086;
    font-family: "DM Mono", monospace;
    font-size: 13px;
    cursor: pointer;
}
.close-btn:hover {
    color: #f38ba8;
}

/* select-with-create */

.select-create {
    position: relative;
}
.select-options {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    max-height: 220px;
    overflow-y: auto;
    z-index: 60;
    padding: 8px 0;
    background-color: #1e1e2e;
}
.select-option {
    padding: 8px 14px;
    color: #cdd6f4;
    font-size: 13px;
    cursor: pointer;
}
.select-option:hover {
    background-color: #313244;
}
.select-option-new {
    color: #a6e3a1;
    border-top: 1px solid #45475a;
}

/* creation popup */

.popup-overlay {
    position: fixed;
    inset: 0;
    background-color: rgba(17, 17, 27, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 70;
}
.popup {
    width: 100%;
    max-width: 380px;
    padding: 24px;
}
.popup::before {
    content: "add new";
}
.popup:hover {
    border-color: #a6e3a1;
}
.popup:hover::before {
    color: #a6e3a1;
}
.popup-input {
    width: 100%;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 10px 12px;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    box-sizing: border-box;
    margin-bottom: 14px;
}
.popup-input:focus {
    outline: none;
    border-color: #a6e3a1;
}
.popup-actions {
    display: flex;
    justify-content: space-between;
    gap: 10px;
}
.popup-btn {
    flex: 1;
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 10px 14px;
    font-family: "DM Mono", monospace;
    font-size: 13px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
    text-transform: lowercase;
}
.popup-btn:hover {
    border-color: #a6e3a1;
}

@media (max-width: 768px) {
    .form-row {
        flex-direction: column;
    }
    .records-grid {
        grid-template-columns: 1fr;
    }
    .search-bar {
        flex-direction: column;
        align-items: stretch;
    }
}
"#;

// CSS-in-Rust: Component that injects styles
#[component]
fn StyleProvider() -> impl IntoView {
    view! {
        <style>{MAIN_STYLES}</style>
    }
}
