//! Доступность и проверка формы обратной связи `#contactForm`.
//!
//! Ошибка поля выводится отдельным элементом `#{id}-error`, связанным с полем через
//! `aria-describedby`. Отправка имитируется: сетевого запроса нет.

pub mod field;

use crate::shared::dom::{alert, collect, listen};
use contracts::shared::contact_form::{
    blocked_alert, invalid_message, validate_field, ALERT_SENT,
};
use field::FormField;
use web_sys::{Document, Event, HtmlFormElement};

/// Поля формы в порядке документа
pub fn form_fields(form: &HtmlFormElement) -> Vec<FormField> {
    collect::<web_sys::Element>(form.query_selector_all("input, select, textarea"))
        .into_iter()
        .enumerate()
        .filter_map(|(position, element)| FormField::from_element(element, position))
        .collect()
}

pub fn init_contact_form(form: Option<HtmlFormElement>) {
    let Some(form) = form else {
        log::debug!("contact form: #contactForm not found, skipped");
        return;
    };

    let fields = form_fields(&form);
    for field in &fields {
        let target = field.clone();
        listen(field.element(), "invalid", move |e: Event| {
            e.prevent_default();
            let message = invalid_message(target.kind(), target.validity_flags());
            mark_invalid(&target, message);
        });

        for event in ["blur", "input"] {
            let target = field.clone();
            listen(field.element(), event, move |_: Event| {
                if target.is_valid() {
                    mark_valid(&target);
                }
            });
        }
    }

    let submitted = form.clone();
    listen(&form, "submit", move |e: Event| {
        // Отправка только имитируется
        e.prevent_default();

        let fields = form_fields(&submitted);
        match validate_form(&fields) {
            Some((first_invalid, message)) => {
                let _ = first_invalid.element().focus();
                log::info!("contact form: submission blocked: {}", message);
                alert(blocked_alert(message));
            }
            None => {
                log::info!("contact form: submitted ({} fields)", fields.len());
                alert(ALERT_SENT);
                submitted.reset();
                fields.iter().for_each(mark_valid);
            }
        }
    });

    log::debug!("contact form: {} fields", fields.len());
}

/// Проверяет все поля; возвращает первое недействительное и его сообщение
fn validate_form(fields: &[FormField]) -> Option<(FormField, &'static str)> {
    let mut first_invalid = None;
    for field in fields {
        match validate_field(field.kind(), field.required(), &field.value()) {
            Ok(()) => mark_valid(field),
            Err(message) => {
                mark_invalid(field, message);
                if first_invalid.is_none() {
                    first_invalid = Some((field.clone(), message));
                }
            }
        }
    }
    first_invalid
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn mark_invalid(field: &FormField, message: &str) {
    let _ = field.element().set_attribute("aria-invalid", "true");
    show_field_error(field, message);
}

fn mark_valid(field: &FormField) {
    let _ = field.element().set_attribute("aria-invalid", "false");
    hide_field_error(field);
}

fn show_field_error(field: &FormField, message: &str) {
    hide_field_error(field);

    let Some(document) = document() else { return };
    let Some(parent) = field.element().parent_node() else {
        return;
    };
    let Ok(error) = document.create_element("div") else {
        return;
    };

    let error_id = field.error_id();
    error.set_id(&error_id);
    error.set_class_name("error-message");
    error.set_text_content(Some(message));
    let _ = parent.append_child(&error);
    let _ = field.element().set_attribute("aria-describedby", &error_id);
}

fn hide_field_error(field: &FormField) {
    let error_id = field.error_id();
    if let Some(existing) = document().and_then(|d| d.get_element_by_id(&error_id)) {
        existing.remove();
    }

    let element = field.element();
    if element.get_attribute("aria-describedby").as_deref() == Some(error_id.as_str()) {
        let _ = element.remove_attribute("aria-describedby");
    }
}
