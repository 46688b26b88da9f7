use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::controller::UserContentController;
use crate::events::{PageLoadState, WebViewEvent};

use super::HostView;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for top-level navigation.
///
/// - `about:` / `data:`: how platforms report an inline HTML load
/// - jsDelivr: the CDN serving the page's stylesheets and script
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["about:", "data:", "https://cdn.jsdelivr.net/"];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

pub(super) type EventQueue = Rc<RefCell<Vec<WebViewEvent>>>;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl HostView {
    /// JS -> Rust. Frames go straight to the content controller on the UI
    /// thread; nothing is queued and nothing is answered.
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        controller: Rc<UserContentController>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            controller.dispatch_raw(request.body());
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            events
                .borrow_mut()
                .push(WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            events
                .borrow_mut()
                .push(WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventQueue,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&url) {
                return true;
            }
            warn!(url = %url, "navigation blocked: URL not in allowlist");
            events
                .borrow_mut()
                .push(WebViewEvent::NavigationBlocked { url });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
