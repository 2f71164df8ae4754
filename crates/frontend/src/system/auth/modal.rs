use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AuthStore;
use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;

/// Sign-in dialog. `on_success` fires once credentials are accepted.
#[component]
pub fn AuthModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let store = use_context::<AuthStore>().expect("AuthStore not found in component tree");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match store.sign_in(username_val, password_val).await {
                Ok(()) => {
                    set_password.set(String::new());
                    set_is_loading.set(false);
                    on_success.run(());
                }
                Err(e) => {
                    log::warn!("Sign in failed: {}", e);
                    set_error_message.set(Some(format!("Sign in failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <Modal title="Sign In" on_close=on_close>
                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="auth-username">"Username"</label>
                        <input
                            type="text"
                            id="auth-username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="auth-password">"Password"</label>
                        <input
                            type="password"
                            id="auth-password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Button button_type="submit" class="auth-form__submit" disabled=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>
            </Modal>
        </Show>
    }
}
