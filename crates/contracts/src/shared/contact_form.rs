//! Правила проверки полей формы обратной связи

use super::phone_mask::is_complete_phone;

pub const MSG_REQUIRED: &str = "Это поле обязательно для заполнения";
pub const MSG_INVALID: &str = "Пожалуйста, заполните это поле правильно";
pub const MSG_EMAIL: &str = "Введите корректный email адрес";
pub const MSG_SELECT: &str = "Пожалуйста, выберите вариант";
pub const MSG_PHONE: &str = "Введите номер телефона полностью";

pub const ALERT_REQUIRED: &str = "Пожалуйста, заполните все обязательные поля";
pub const ALERT_SENT: &str = "Спасибо! Ваше сообщение отправлено.";

/// Вид поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
    Hidden,
}

impl FieldKind {
    /// Вид поля по тегу и атрибуту `type`
    pub fn detect(tag_name: &str, input_type: Option<&str>) -> Self {
        match tag_name.to_ascii_lowercase().as_str() {
            "select" => FieldKind::Select,
            "textarea" => FieldKind::TextArea,
            _ => match input_type.map(str::to_ascii_lowercase).as_deref() {
                Some("email") => FieldKind::Email,
                Some("tel") => FieldKind::Tel,
                Some("hidden") => FieldKind::Hidden,
                _ => FieldKind::Text,
            },
        }
    }
}

/// Причина, по которой браузер счёл поле недействительным
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityFlags {
    pub value_missing: bool,
    pub type_mismatch: bool,
}

/// Сообщение для события `invalid` нативной проверки
pub fn invalid_message(kind: FieldKind, validity: ValidityFlags) -> &'static str {
    match kind {
        FieldKind::Email if validity.type_mismatch => MSG_EMAIL,
        FieldKind::Select if validity.value_missing => MSG_SELECT,
        _ => MSG_INVALID,
    }
}

/// Проверка значения поля перед отправкой.
///
/// Пустое необязательное поле допустимо; непустой телефон должен быть полным.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required && kind != FieldKind::Hidden {
            Err(MSG_REQUIRED)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !looks_like_email(trimmed) => Err(MSG_EMAIL),
        FieldKind::Tel if !is_complete_phone(trimmed) => Err(MSG_PHONE),
        _ => Ok(()),
    }
}

/// Текст `alert` при заблокированной отправке по сообщению первого недействительного
/// поля: пропуск обязательного поля даёт общее напоминание, остальные ошибки
/// показываются как есть.
pub fn blocked_alert(first_error: &'static str) -> &'static str {
    if first_error == MSG_REQUIRED {
        ALERT_REQUIRED
    } else {
        first_error
    }
}

/// Id элемента с сообщением об ошибке поля: по `id`, затем по `name`, иначе по
/// позиции поля в форме, чтобы у безымянных полей ошибки не смешивались
pub fn error_element_id(id: &str, name: Option<&str>, position: usize) -> String {
    match (id, name) {
        (id, _) if !id.is_empty() => format!("{}-error", id),
        (_, Some(name)) if !name.is_empty() => format!("{}-error", name),
        _ => format!("field-{}-error", position),
    }
}

/// Грубая проверка формы адреса `local@domain.tld`
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
