//! # Dashboard Handlers
//!
//! Tab selection and admin actions. Actions are validated locally, sent to
//! the server, and on success the affected tab is reloaded.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::domain::dashboard::{AdminAction, DashboardTab};
use crate::domain::payment::Tone;
use crate::i18n::{Locale, Message};
use crate::core::error::Result;
use crate::utils::validation;

/// Switch to a tab and load its data.
pub(crate) fn handle_select_tab(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, tab: DashboardTab) {
    {
        let mut state = state.write();
        if !state.can_open_tab(tab) {
            tracing::warn!(tab = ?tab, "Dashboard tab not allowed for current user");
            let message = Message::Forbidden.text(state.locale);
            state.notify(Tone::Error, message);
            return;
        }
        state.dashboard.active_tab = tab;
    }
    tasks::dashboard::load_tab(state, event_tx, tab);
}

/// Run an admin mutation.
pub(crate) fn handle_admin_action(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, action: AdminAction) {
    let api_client = {
        let mut state = state.write();
        let locale = state.locale;

        if !state.can_open_tab(action.tab()) {
            tracing::warn!(action = action.name(), "Admin action not allowed for current user");
            state.notify(Tone::Error, Message::Forbidden.text(locale));
            return;
        }

        if let Err(e) = validate_action(&action, state.max_upload_bytes, locale) {
            state.notify(Tone::Error, e.user_message(locale, Message::UnexpectedError));
            return;
        }

        state.dashboard.action_in_progress = true;
        state.api_client.clone()
    };

    tracing::info!(action = action.name(), "Running admin action");
    tokio::spawn(async move {
        let result = api_client.perform_admin_action(action.clone()).await;
        let _ = event_tx.send(AppEvent::AdminActionCompleted { action, result }).await;
    });
}

fn validate_action(action: &AdminAction, max_upload_bytes: u64, locale: Locale) -> Result<()> {
    match action {
        AdminAction::CreateProduct(payload) | AdminAction::UpdateProduct(_, payload) => {
            validation::validate_product(payload, locale).into_result()
        }
        AdminAction::UploadMainImage(_, image) => {
            validation::validate_image_upload(&image.file_name, image.size(), max_upload_bytes, locale).into_result()
        }
        AdminAction::UploadSubImages(_, images) => {
            for image in images {
                validation::validate_image_upload(&image.file_name, image.size(), max_upload_bytes, locale)
                    .into_result()?;
            }
            Ok(())
        }
        AdminAction::CreateSlider(form, image) => {
            validation::validate_required(&form.title_ar, "عنوان السلايدر", "Slider title", locale).into_result()?;
            validation::validate_image_upload(&image.file_name, image.size(), max_upload_bytes, locale).into_result()
        }
        AdminAction::SaveMarquee(marquee) => {
            validation::validate_required(&marquee.text_ar, "نص الشريط", "Marquee text", locale).into_result()
        }
        AdminAction::SaveFooterLink(link) => {
            validation::validate_required(&link.platform, "المنصة", "Platform", locale).into_result()?;
            validation::validate_required(&link.url, "الرابط", "URL", locale).into_result()
        }
        AdminAction::CreateDiscountCode(code) => validation::validate_discount_code(code, locale).into_result(),
        _ => Ok(()),
    }
}
