use shared::Navigator;

/// Reports the post-login destination on stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "redirecting");
        println!("Logged in. Continue at {}", path);
    }
}
