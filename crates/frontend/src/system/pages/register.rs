use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::api;

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Every field, role included, must be filled in.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<Registration, String> {
    let required = || "All fields are required.".to_string();
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(required());
    }
    let role = Role::parse(role).ok_or_else(required)?;
    Ok(Registration {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move || {
        let registration = match validate_registration(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(r) => r,
            Err(e) => {
                set_error_message.set(Some(e));
                return;
            }
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let Registration {
                username,
                email,
                password,
                role,
            } = registration;
            match api::register(username, email, password, role).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    ctx.navigate("/login");
                }
                Err(e) => {
                    log::error!("registration failed: {}", e);
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
                <h2>"Create an account"</h2>

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
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        >
                            <option value="">"Select a role"</option>
                            {Role::ALL
                                .iter()
                                .map(|r| view! { <option value=r.as_str()>{r.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already registered? "
                        <a href="/login" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate("/login");
                        }>"Sign in"</a>
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
    fn every_field_is_required() {
        let expected = Err("All fields are required.".to_string());
        assert_eq!(validate_registration("", "a@b.c", "pw", "Student"), expected);
        assert_eq!(validate_registration("abebe", " ", "pw", "Student"), expected);
        assert_eq!(validate_registration("abebe", "a@b.c", "", "Student"), expected);
        assert_eq!(validate_registration("abebe", "a@b.c", "pw", ""), expected);
    }

    #[test]
    fn valid_form_carries_parsed_role() {
        let r = validate_registration(" abebe ", "a@b.c", "pw", "StoreManager").unwrap();
        assert_eq!(r.username, "abebe");
        assert_eq!(r.role, Role::StoreManager);
    }
}
