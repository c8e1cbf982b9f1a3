use shared::{LoginAttempt, LoginError, LoginFlow};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::config;
use crate::services::{GlooAuthApi, LocalTokenStore, RouterNavigator};

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let attempt = use_state(LoginAttempt::default);
    let router = use_navigator();

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let attempt = attempt.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*attempt).clone();
            next.username = (*username).clone();
            next.password = (*password).clone();

            let request = match next.begin() {
                Ok(request) => request,
                Err(LoginError::AlreadySubmitting) => return,
                Err(_) => {
                    attempt.set(next);
                    return;
                }
            };
            attempt.set(next.clone());

            let flow = LoginFlow::new(
                GlooAuthApi::new(config::api_base_url()),
                LocalTokenStore::admin(),
                RouterNavigator::new(router.clone()),
            );
            let attempt = attempt.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = flow.authenticate(request).await;
                next.finish(outcome);
                attempt.set(next);
            });
        })
    };

    let loading = attempt.is_loading();
    let error = attempt.error_message().map(str::to_string);

    html! {
        <div class="page">
            <Header />
            <main class="login-container">
                <div class="login-card">
                    <div class="login-heading">
                        <h1 class="login-title">{ "Admin Login" }</h1>
                        <p class="login-subtitle">
                            { "Enter your credentials to access the admin dashboard" }
                        </p>
                    </div>

                    <form class="login-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="username">{ "Username" }</label>
                            <input
                                type="text"
                                id="username"
                                name="username"
                                placeholder="admin123"
                                value={(*username).clone()}
                                oninput={on_username_input}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{ "Password" }</label>
                            <input
                                type="password"
                                id="password"
                                name="password"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                required=true
                            />
                        </div>

                        if let Some(err) = error {
                            <p class="error">{ err }</p>
                        }

                        <button type="submit" class="btn btn-primary login-button" disabled={loading}>
                            { if loading { "Logging in..." } else { "Login" } }
                        </button>
                    </form>
                </div>
            </main>
            <Footer />
        </div>
    }
}
