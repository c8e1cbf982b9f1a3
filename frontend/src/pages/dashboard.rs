use shared::{Navigator, TokenStore, ADMIN_LOGIN_PATH};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::services::{LocalTokenStore, RouterNavigator};
use crate::Route;

/// Landing page after login. Only checks that a token is present.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let signed_in = use_state(|| LocalTokenStore::admin().get().is_some());
    let router = use_navigator();

    let on_logout = {
        let signed_in = signed_in.clone();
        Callback::from(move |_: MouseEvent| {
            LocalTokenStore::admin().clear();
            signed_in.set(false);
            RouterNavigator::new(router.clone()).navigate(ADMIN_LOGIN_PATH);
        })
    };

    if !*signed_in {
        return html! { <Redirect<Route> to={Route::AdminLogin} /> };
    }

    html! {
        <div class="page">
            <Header on_logout={on_logout} />
            <main class="dashboard">
                <h1>{ "Admin Dashboard" }</h1>
                <p>{ "You are signed in." }</p>
            </main>
            <Footer />
        </div>
    }
}
