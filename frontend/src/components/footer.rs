use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p class="footer-note">{ "© 2024 ADMIN PORTAL. All rights reserved." }</p>
                <nav class="footer-links">
                    <a href="/terms">{ "Terms of Service" }</a>
                    <a href="/privacy">{ "Privacy" }</a>
                </nav>
            </div>
        </footer>
    }
}
