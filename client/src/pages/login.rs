//! Login page: cédula + password against the association API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::REGISTER_PATH;

/// Shown when the API gives no usable reason for a failed login.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Cédula o contraseña incorrecta";

/// Trim the cédula and require both fields before sending anything.
///
/// The password is passed through untouched; spaces may be part of it.
pub fn validate_login_input(cedula: &str, password: &str) -> Result<(String, String), &'static str> {
    let cedula = cedula.trim();
    if cedula.is_empty() || password.is_empty() {
        return Err("Ingresa tu cédula y contraseña");
    }
    Ok((cedula.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let cedula = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = crate::state::context::SessionContext::expect();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (cedula_value, password_value) = match validate_login_input(&cedula.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&cedula_value, &password_value).await {
                    Ok(_) => navigate(crate::config::LANDING_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.user_message(LOGIN_FALLBACK_MESSAGE));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cedula_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Iniciar Sesión"</h1>
                <p class="auth-card__subtitle">"ASOPADEL Barinas"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Cédula"
                        <input
                            class="auth-input"
                            type="text"
                            inputmode="numeric"
                            autocomplete="username"
                            prop:value=move || cedula.get()
                            on:input=move |ev| cedula.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Contraseña"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿No tienes cuenta? "
                    <A href=REGISTER_PATH>"Regístrate"</A>
                </p>
            </div>
        </div>
    }
}
