//! Self-registration page with auto-login on success.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{LOGIN_PATH, MIN_PASSWORD_LEN};
use crate::state::registration::{RegistrationForm, SelfRole};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
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
        let snapshot = form.get();
        // Fail fast without a request; the async flow validates again.
        if let Err(e) = snapshot.validate() {
            error.set(e.to_string());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.register(&snapshot).await {
                    Ok(_) => navigate(crate::config::LANDING_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Crear Cuenta"</h1>
                <p class="auth-card__subtitle">"Únete a la asociación"</p>
                <form class="auth-form" on:submit=on_submit>
                    {text_field(form, "Cédula *", "text", "username", |f| f.cedula.clone(), |f, v| f.cedula = v)}
                    {text_field(form, "Correo *", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    <div class="auth-form__row">
                        {text_field(form, "Nombre *", "text", "given-name", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                        {text_field(form, "Apellido *", "text", "family-name", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    </div>
                    {text_field(form, "Teléfono", "tel", "tel", |f| f.telefono.clone(), |f, v| f.telefono = v)}
                    <label class="auth-form__label">
                        "Rol"
                        <select
                            class="auth-input"
                            prop:value=move || form.with(|f| f.role.as_str())
                            on:change=move |ev| {
                                let role = SelfRole::parse(&event_target_value(&ev));
                                form.update(|f| f.role = role);
                            }
                        >
                            <option value=SelfRole::Player.as_str()>"Jugador"</option>
                            <option value=SelfRole::Referee.as_str()>"Árbitro"</option>
                        </select>
                    </label>
                    {text_field(form, "Contraseña *", "password", "new-password", |f| f.password.clone(), |f, v| f.password = v)}
                    {text_field(
                        form,
                        "Confirmar contraseña *",
                        "password",
                        "new-password",
                        |f| f.password2.clone(),
                        |f, v| f.password2 = v,
                    )}
                    <p class="auth-form__hint">{format!("Mínimo {MIN_PASSWORD_LEN} caracteres")}</p>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿Ya tienes cuenta? "
                    <A href=LOGIN_PATH>"Inicia sesión"</A>
                </p>
            </div>
        </div>
    }
}

fn text_field(
    form: RwSignal<RegistrationForm>,
    label: &'static str,
    kind: &'static str,
    autocomplete: &'static str,
    get: fn(&RegistrationForm) -> String,
    set: fn(&mut RegistrationForm, String),
) -> impl IntoView {
    view! {
        <label class="auth-form__label">
            {label}
            <input
                class="auth-input"
                type=kind
                autocomplete=autocomplete
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}
