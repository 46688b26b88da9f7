//! WebView event types.

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events queued by the host view for the main loop to drain.
///
/// Bridge messages are not queued; they are delivered synchronously
/// through the content controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Document title changed.
    TitleChanged { title: String },
    /// A navigation was refused by the allowlist.
    NavigationBlocked { url: String },
}
