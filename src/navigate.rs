/// Navigation side effect seam.
///
/// Selection handlers dispatch a path and move on; no return value is
/// consumed (fire-and-forget).
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

/// Records the most recent destination. The binary prints it to stdout after
/// the terminal is restored, handing the path to whatever launched us.
#[derive(Debug, Default)]
pub struct Router {
    destination: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, path: &str) {
        log::debug!("Navigating to {:?}", path);
        self.destination = Some(path.to_string());
    }
}
