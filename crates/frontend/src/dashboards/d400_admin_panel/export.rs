//! Excel export launched from the admin panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::export::download_excel_export;
use crate::shared::http::ApiError;
use crate::shared::notifications::{NoticeKind, Notifier};

pub const EXPORT_OK: &str = "¡Exportación exitosa! El archivo Excel se ha descargado correctamente.";
pub const EXPORT_FAILED: &str = "Error de exportación. No se pudo generar el archivo Excel.";

/// Notice shown once the download finished or failed
pub fn export_notice(result: &Result<String, ApiError>) -> (NoticeKind, &'static str) {
    match result {
        Ok(_) => (NoticeKind::Success, EXPORT_OK),
        Err(_) => (NoticeKind::Error, EXPORT_FAILED),
    }
}

/// Starts the export unless one is already running
pub fn start_export(busy: RwSignal<bool>, notifier: impl Notifier + 'static) {
    if busy.get_untracked() {
        log::debug!("Exportación ya en curso");
        return;
    }
    busy.set(true);

    spawn_local(async move {
        let result = download_excel_export().await;
        match &result {
            Ok(filename) => log::info!("Exportación completada: {}", filename),
            Err(e) => log::error!("Error exportando datos: {}", e),
        }
        let (kind, message) = export_notice(&result);
        notifier.notify(kind, message);
        busy.set(false);
    });
}
