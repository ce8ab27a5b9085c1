use tower_sessions::Session;

use crate::error::PanelError;
use crate::features::panel::PanelState;

const PANEL_STATE_KEY: &str = "panel_state";

pub async fn load_panel_state(session: &Session) -> Result<PanelState, PanelError> {
    Ok(session
        .get::<PanelState>(PANEL_STATE_KEY)
        .await?
        .unwrap_or_default())
}

pub async fn store_panel_state(session: &Session, state: &PanelState) -> Result<(), PanelError> {
    session.insert(PANEL_STATE_KEY, state).await?;
    Ok(())
}
