use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Shows a logout button when set.
    #[prop_or_default]
    pub on_logout: Option<Callback<MouseEvent>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <nav>
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-title">{ "ADMIN PORTAL" }</span>
                </Link<Route>>
                if let Some(on_logout) = props.on_logout.clone() {
                    <button class="btn-logout" onclick={on_logout}>
                        { "Logout" }
                    </button>
                }
            </nav>
        </header>
    }
}
