use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::app::alert;
use crate::otp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Registering,
    ForgottenPassword,
}

/// Standalone entry page cycling between login, registration and password
/// reset. Registration and reset gain an OTP-pending sub-state once the
/// backend accepts the request; `otp_sent_at` records the send time and
/// drives the resend cooldown.
#[component]
pub fn AuthPage<F>(on_login: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (otp_code, set_otp_code) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (otp_sent_at, set_otp_sent_at) = create_signal(None::<f64>);
    let (resend_wait, set_resend_wait) = create_signal(0u64);

    // One-second countdown ticker. Recreated whenever an OTP is (re)sent,
    // dropped on mode change or unmount; dropping an Interval cancels it.
    let ticker = store_value(None::<Interval>);
    create_effect(move |_| {
        let sent = otp_sent_at.get();
        ticker.update_value(|t| {
            t.take();
        });
        match sent {
            Some(sent_ms) => {
                set_resend_wait.set(otp::resend_wait_secs(js_sys::Date::now(), sent_ms));
                let handle = Interval::new(1_000, move || {
                    let left = otp::resend_wait_secs(js_sys::Date::now(), sent_ms);
                    if left != resend_wait.get_untracked() {
                        set_resend_wait.set(left);
                    }
                });
                ticker.set_value(Some(handle));
            }
            None => set_resend_wait.set(0),
        }
    });
    on_cleanup(move || {
        ticker.update_value(|t| {
            t.take();
        });
    });

    let switch_mode = move |next: AuthMode| {
        set_mode.set(next);
        set_error.set(None);
        set_otp_code.set(String::new());
        set_otp_sent_at.set(None);
    };

    let handle_login = move |_| {
        let user = username.get();
        let pass = password.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(response) => on_login(response.token),
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let handle_register = move |_| {
        let user = username.get();
        let pass = password.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::register(&user, &pass).await {
                Ok(()) => {
                    alert("OTP sent successfully");
                    set_otp_sent_at.set(Some(js_sys::Date::now()));
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let handle_forget = move |_| {
        let user = username.get();
        let fresh = new_password.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::forget_password(&user, &fresh).await {
                Ok(message) => {
                    alert(&message);
                    set_otp_sent_at.set(Some(js_sys::Date::now()));
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let handle_verify = move |_| {
        let user = username.get();
        let code = otp_code.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::verify_otp(&user, &code).await {
                Ok(()) => {
                    alert("OTP verified successfully");
                    switch_mode(AuthMode::Login);
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let handle_resend = move |_| {
        let user = username.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::resend_otp(&user).await {
                Ok(()) => {
                    alert("OTP resent successfully");
                    set_otp_sent_at.set(Some(js_sys::Date::now()));
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let otp_pending = move || otp_sent_at.get().is_some();

    view! {
        <div class="auth-grid">
            <div class="auth-header border-container">
                <h1 class="main-title">"EduWise"</h1>
                <p style="color: #bac2de; font-size: 1rem; margin: 10px 0 0 0;">
                    "course material sharing for the institute"
                </p>
            </div>

            <div class="auth-form-section border-container">
                <h2 style="color: #cdd6f4; margin: 0 0 20px 0; font-size: 1.3rem; font-weight: 500;">
                    {move || match mode.get() {
                        AuthMode::Login => "Login",
                        AuthMode::Registering => "Register",
                        AuthMode::ForgottenPassword => "Forgot Password",
                    }}
                </h2>

                <label class="field-label">"iitk username"</label>
                <input
                    type="text"
                    class="auth-input"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    placeholder="username (without domain)"
                />

                <Show when=move || mode.get() == AuthMode::Login>
                    <label class="field-label">"password"</label>
                    <input
                        type="password"
                        class="auth-input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        placeholder="password"
                    />
                    <button class="auth-btn" disabled=move || loading.get() on:click=handle_login>
                        "login"
                    </button>
                    <button class="auth-link" on:click=move |_| switch_mode(AuthMode::Registering)>
                        "Don't have an account? Register here"
                    </button>
                    <button class="auth-link" on:click=move |_| switch_mode(AuthMode::ForgottenPassword)>
                        "Forgot password? Click here"
                    </button>
                </Show>

                <Show when=move || mode.get() == AuthMode::Registering>
                    <label class="field-label">"password"</label>
                    <input
                        type="password"
                        class="auth-input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        placeholder="password"
                    />
                    <button class="auth-btn" disabled=move || loading.get() on:click=handle_register>
                        "register"
                    </button>
                    <button class="auth-link" on:click=move |_| switch_mode(AuthMode::Login)>
                        "Already registered? Login here"
                    </button>
                </Show>

                <Show when=move || mode.get() == AuthMode::ForgottenPassword>
                    <label class="field-label">"new password"</label>
                    <input
                        type="password"
                        class="auth-input"
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        placeholder="new password"
                    />
                    <button class="auth-btn" disabled=move || loading.get() on:click=handle_forget>
                        "send otp"
                    </button>
                    <button class="auth-link" on:click=move |_| switch_mode(AuthMode::Login)>
                        "Login here"
                    </button>
                </Show>

                <Show when=move || mode.get() != AuthMode::Login && otp_pending()>
                    <label class="field-label">"one-time password"</label>
                    <input
                        type="text"
                        class="auth-input"
                        prop:value=move || otp_code.get()
                        on:input=move |ev| set_otp_code.set(event_target_value(&ev))
                        placeholder="enter otp"
                    />
                    <button class="auth-btn" disabled=move || loading.get() on:click=handle_verify>
                        "verify otp"
                    </button>
                    <button
                        class="auth-link"
                        disabled=move || loading.get() || resend_wait.get() > 0
                        on:click=handle_resend
                    >
                        {move || {
                            let wait = resend_wait.get();
                            if wait > 0 {
                                format!("Resend OTP ({wait}s)")
                            } else {
                                "Resend OTP".to_string()
                            }
                        }}
                    </button>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="auth-error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
