use shared::Navigator;
use web_sys::window;
use yew_router::prelude::*;

use crate::Route;

/// Pushes routes through yew-router, falling back to a full page load for
/// paths the router does not know.
#[derive(Clone)]
pub struct RouterNavigator {
    router: Option<yew_router::navigator::Navigator>,
}

impl RouterNavigator {
    pub fn new(router: Option<yew_router::navigator::Navigator>) -> Self {
        Self { router }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        let route = Route::recognize(path).filter(|route| *route != Route::NotFound);
        if let (Some(router), Some(route)) = (&self.router, route) {
            router.push(&route);
            return;
        }

        log::debug!("no router for {}, loading page", path);
        if let Some(w) = window() {
            let _ = w.location().set_href(path);
        }
    }
}
