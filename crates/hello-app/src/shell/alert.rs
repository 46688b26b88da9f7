//! The native popup: its fixed text and how it gets shown.

/// Fixed content of a confirm/cancel dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertContent {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

/// The popup requested by the page. Shown verbatim.
pub const SHOW_ALERT: AlertContent = AlertContent {
    title: "提示",
    message: "这是从网页触发的原生弹窗",
    confirm_label: "确定",
    cancel_label: "取消",
};

/// How the user closed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChoice {
    /// The confirm button.
    Confirm,
    /// The cancel button.
    Cancel,
    /// Closed without pressing either button (escape, close box, click outside).
    Dismissed,
}

/// Something that can show an [`AlertContent`] modally and report the choice.
pub trait AlertPresenter {
    /// Show `alert` and block until the user closes it.
    fn present(&self, alert: &AlertContent) -> AlertChoice;
}
