//! Ручной аудит доступности страницы для разработчика.
//!
//! В режиме разработки запускается при загрузке; в любой момент доступен из консоли
//! как `runAccessibilityAudit()`.

pub mod snapshot_builder;

use contracts::shared::a11y::{audit, AuditReport, REPORT_TITLE};
use snapshot_builder::build_page_snapshot;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::console;

const AUDIT_REPORT_KEY: &str = "a11y_audit_report";

/// Снимает страницу, проверяет её и выводит отчёт в консоль
pub fn run_audit() -> Option<AuditReport> {
    let window = web_sys::window()?;
    let snapshot = build_page_snapshot(&window)?;
    let report = audit(&snapshot);

    log_report(&report);
    save_report(&report);
    log::info!("a11y audit: {} issues", report.issue_count());
    Some(report)
}

/// Сгруппированный вывод: один раздел консоли на категорию
fn log_report(report: &AuditReport) {
    console::group_1(&JsValue::from_str(REPORT_TITLE));
    for section in &report.sections {
        console::group_1(&JsValue::from_str(section.category.display_name()));
        for finding in &section.findings {
            console::log_1(&JsValue::from_str(finding));
        }
        console::group_end();
    }
    console::group_end();
}

fn save_report(report: &AuditReport) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        if let Ok(json) = serde_json::to_string(report) {
            let _ = storage.set_item(AUDIT_REPORT_KEY, &json);
        }
    }
}

/// Запуск аудита из консоли браузера. Возвращает отчёт как JS-объект.
#[wasm_bindgen(js_name = runAccessibilityAudit)]
pub fn run_accessibility_audit() -> JsValue {
    run_audit()
        .and_then(|report| serde_wasm_bindgen::to_value(&report).ok())
        .unwrap_or(JsValue::NULL)
}
