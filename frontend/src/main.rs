use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod services;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::AdminLogin => html! { <pages::login::Login /> },
        Route::AdminDashboard => html! { <pages::dashboard::Dashboard /> },
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::AdminLogin} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
