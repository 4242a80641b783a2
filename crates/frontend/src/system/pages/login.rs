use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::navigation::registry::landing_route;
use crate::system::auth::context::{do_login, use_session};

/// Both fields are required before the backend is asked.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Username/email and password are required".to_string());
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move || {
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        if let Err(e) = validate_credentials(&username_val, &password_val) {
            set_error_message.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(session, username_val.trim().to_string(), password_val).await {
                Ok(role) => {
                    set_is_loading.set(false);
                    ctx.navigate(landing_route(role));
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ECE Store"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <div class="form-group">
                        <label for="username">"Username or email"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "No account yet? "
                        <a href="/register" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate("/register");
                        }>"Register"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected_locally() {
        let expected = Err("Username/email and password are required".to_string());
        assert_eq!(validate_credentials("", "secret"), expected);
        assert_eq!(validate_credentials("   ", "secret"), expected);
        assert_eq!(validate_credentials("abebe", ""), expected);
        assert_eq!(validate_credentials("abebe", "secret"), Ok(()));
    }
}
