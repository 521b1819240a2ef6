//! # Dashboard Tasks
//!
//! The overview fetches stats, recent orders and alerts concurrently and is
//! applied only once all three succeed; any failure reports a single error.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::domain::dashboard::{DashboardTab, Overview, TabData};

/// Load a dashboard tab in the background.
pub(crate) fn load_tab(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, tab: DashboardTab) {
    let api_client = {
        let mut state = state.write();
        state.dashboard.loading.insert(tab);
        state.api_client.clone()
    };

    spawn(async move {
        let start = std::time::Instant::now();
        let result = match tab {
            DashboardTab::Overview => load_overview(api_client.as_ref()).await.map(TabData::Overview),
            tab => api_client.load_tab(tab).await,
        };
        tracing::debug!(
            tab = ?tab,
            success = result.is_ok(),
            duration_ms = start.elapsed().as_millis(),
            "Dashboard tab fetched"
        );
        let _ = event_tx.send(AppEvent::DashboardTabLoaded { tab, result }).await;
    });
}

pub(crate) async fn load_overview(api_client: &dyn ApiService) -> Result<Overview> {
    let (stats, recent_orders, alerts) = tokio::try_join!(
        api_client.get_dashboard_stats(),
        api_client.get_recent_orders(),
        api_client.get_alerts(),
    )?;

    Ok(Overview {
        stats,
        recent_orders,
        alerts,
    })
}
