use std::cell::RefCell;
use std::rc::Rc;

/// Hands control to another client-side route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
