use leptos::prelude::*;
use leptos::task::spawn_local;

use super::HeaderState;
use crate::shared::icons::icon;

/// Account button: a menu with sign-out for a session, a sign-in button otherwise
#[component]
pub fn UserMenu(state: HeaderState) -> impl IntoView {
    move || match state.session() {
        Some(session) => view! {
            <div class="user-menu">
                <button
                    class="button button--ghost"
                    aria-label="Account"
                    on:click=move |_| state.toggle_user_menu()
                >
                    {icon("user")}
                </button>
                <Show when=move || state.user_menu_open.get()>
                    <div class="user-menu__dropdown">
                        <div class="user-menu__identity">
                            <p class="user-menu__name">{session.display_name.clone()}</p>
                            <p class="user-menu__email">{session.email.clone()}</p>
                        </div>
                        <button
                            class="user-menu__sign-out"
                            on:click=move |_| spawn_local(async move { state.sign_out().await })
                        >
                            {icon("log-out")}
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </div>
        }
        .into_any(),
        None => view! {
            <button class="button button--ghost user-menu__sign-in" on:click=move |_| state.open_auth_modal()>
                {icon("user")}
                <span>"Sign In"</span>
            </button>
        }
        .into_any(),
    }
}
