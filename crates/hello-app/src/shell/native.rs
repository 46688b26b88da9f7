//! System message box via `rfd`.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use super::alert::{AlertChoice, AlertPresenter, AlertContent};

/// Presents alerts as blocking system message boxes.
#[derive(Debug, Default)]
pub struct NativePresenter;

impl AlertPresenter for NativePresenter {
    fn present(&self, alert: &AlertContent) -> AlertChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(alert.title)
            .set_description(alert.message)
            .set_buttons(MessageButtons::OkCancelCustom(
                alert.confirm_label.to_string(),
                alert.cancel_label.to_string(),
            ))
            .show();
        choice_from_result(alert, result)
    }
}

/// Map an `rfd` result onto the dialog's buttons.
///
/// Backends differ: some report custom buttons by label, others fall back
/// to `Ok`/`Cancel`.
fn choice_from_result(alert: &AlertContent, result: MessageDialogResult) -> AlertChoice {
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => AlertChoice::Confirm,
        MessageDialogResult::Cancel | MessageDialogResult::No => AlertChoice::Cancel,
        MessageDialogResult::Custom(label) if label == alert.confirm_label => AlertChoice::Confirm,
        MessageDialogResult::Custom(label) if label == alert.cancel_label => AlertChoice::Cancel,
        MessageDialogResult::Custom(_) => AlertChoice::Dismissed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::alert::SHOW_ALERT;

    #[test]
    fn custom_labels_map_to_buttons() {
        assert_eq!(
            choice_from_result(&SHOW_ALERT, MessageDialogResult::Custom("确定".into())),
            AlertChoice::Confirm
        );
        assert_eq!(
            choice_from_result(&SHOW_ALERT, MessageDialogResult::Custom("取消".into())),
            AlertChoice::Cancel
        );
    }

    #[test]
    fn stock_results_map_to_buttons() {
        assert_eq!(
            choice_from_result(&SHOW_ALERT, MessageDialogResult::Ok),
            AlertChoice::Confirm
        );
        assert_eq!(
            choice_from_result(&SHOW_ALERT, MessageDialogResult::Cancel),
            AlertChoice::Cancel
        );
    }

    #[test]
    fn unknown_label_is_a_dismissal() {
        assert_eq!(
            choice_from_result(&SHOW_ALERT, MessageDialogResult::Custom(String::new())),
            AlertChoice::Dismissed
        );
    }
}
