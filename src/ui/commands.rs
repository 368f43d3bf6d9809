use crate::calendar::MonthGrid;
use crate::core::app_state::AppContext;
use crate::core::error::Result;
use tauri::State;
use tracing::debug;

/// Date picked in the webview, as `YYYY-MM-DD`; returns the new label
#[tauri::command]
pub async fn select_date(date: String, context: State<'_, AppContext>) -> Result<String> {
    debug!("select_date({})", date);
    let mut tray = context.tray.write().await;
    tray.select_date(&date)
}

#[tauri::command]
pub async fn current_label(context: State<'_, AppContext>) -> Result<String> {
    Ok(context.tray.read().await.current_label())
}

#[tauri::command]
pub async fn visible_months(context: State<'_, AppContext>) -> Result<Vec<MonthGrid>> {
    context.tray.read().await.visible_months()
}

/// "< Previous" sends -1, "Next >" sends 1
#[tauri::command]
pub async fn shift_months(delta: i32, context: State<'_, AppContext>) -> Result<Vec<MonthGrid>> {
    context.tray.write().await.shift_months(delta)
}
