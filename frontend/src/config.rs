/// Base URL of the admin API, fixed at build time.
///
/// Left empty when `PUBLIC_API_URL` is unset, so requests go to the page's own origin.
pub fn api_base_url() -> &'static str {
    option_env!("PUBLIC_API_URL").unwrap_or("")
}
