//! Маска телефонного номера `+7 (XXX) XXX-XX-XX`.

/// Количество цифр в полном номере вместе с кодом страны
pub const PHONE_DIGITS: usize = 11;

/// Код страны
const COUNTRY_CODE: char = '7';

/// Вид правки поля, по `InputEvent.inputType`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// Ввод, вставка, автозаполнение
    Insert,
    /// Любое `delete*`
    Delete,
}

impl PhoneEdit {
    /// Событие без `inputType` (синтетическое `new Event('input')`) считается вводом
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some(kind) if kind.starts_with("delete") => PhoneEdit::Delete,
            _ => PhoneEdit::Insert,
        }
    }
}

/// Цифры номера с нормализованным кодом страны, не длиннее [`PHONE_DIGITS`].
///
/// Текст с `+` уже несёт код страны (значение под маской). Без `+` ровно 10 цифр
/// считаются номером без кода страны и получают префикс `7` (вставка, автозаполнение).
/// В остальных случаях ведущая `8` заменяется на `7`, первая цифра, отличная от `7`,
/// получает префикс `7`.
pub fn normalize_digits(text: &str) -> String {
    normalize(text, text.trim_start().starts_with('+'))
}

fn normalize(text: &str, masked: bool) -> String {
    let digits = text.chars().filter(char::is_ascii_digit).collect::<String>();
    if !masked && digits.len() == PHONE_DIGITS - 1 {
        return format!("{}{}", COUNTRY_CODE, digits);
    }
    let first = digits.chars().next();
    let mut normalized = match first {
        None => return String::new(),
        Some('8') => format!("{}{}", COUNTRY_CODE, &digits[1..]),
        Some(COUNTRY_CODE) => digits,
        Some(_) => format!("{}{}", COUNTRY_CODE, digits),
    };
    normalized.truncate(PHONE_DIGITS);
    normalized
}

fn count_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Форматирует произвольный текст по маске, по мере ввода.
///
/// # Примеры
///
/// ```
/// use contracts::shared::phone_mask::format_phone;
/// assert_eq!(format_phone("89123456789"), "+7 (912) 345-67-89");
/// assert_eq!(format_phone("912"), "+7 (912");
/// ```
pub fn format_phone(text: &str) -> String {
    format_digits(&normalize_digits(text))
}

/// Раскладывает уже нормализованные цифры по маске
fn format_digits(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    // Все символы ASCII, поэтому срезы по байтам безопасны
    let part = |from: usize, to: usize| &digits[from.min(digits.len())..to.min(digits.len())];

    let mut result = String::from("+7");
    let area = part(1, 4);
    if !area.is_empty() {
        result.push_str(" (");
        result.push_str(area);
    }
    let first = part(4, 7);
    if !first.is_empty() {
        result.push_str(") ");
        result.push_str(first);
    }
    let second = part(7, 9);
    if !second.is_empty() {
        result.push('-');
        result.push_str(second);
    }
    let third = part(9, 11);
    if !third.is_empty() {
        result.push('-');
        result.push_str(third);
    }
    result
}

/// Применяет маску после редактирования поля.
///
/// Если удаление затронуло только символы маски (скобку, пробел, дефис), удаляется
/// последняя цифра, иначе Backspace «застревал» бы на разделителе. Удалённый код
/// страны возвращается на место, остальные цифры не трогаются. Удаление до голого
/// кода страны очищает поле.
pub fn apply_phone_edit(previous: &str, current: &str, edit: PhoneEdit) -> String {
    if edit == PhoneEdit::Insert {
        return format_phone(current);
    }

    let deleted_at = previous
        .chars()
        .zip(current.chars())
        .take_while(|(before, after)| before == after)
        .count();
    let mut digits = if count_digits(current) == count_digits(previous) {
        // Стёрт только разделитель
        let mut digits = normalize(current, true);
        digits.pop();
        digits
    } else if count_digits(&previous.chars().take(deleted_at).collect::<String>()) == 0 {
        // Стёрт код страны: он фиксирован, остальные цифры остаются как были
        let rest = current.chars().filter(char::is_ascii_digit).collect::<String>();
        format!("{}{}", COUNTRY_CODE, rest)
    } else {
        normalize(current, true)
    };
    digits.truncate(PHONE_DIGITS);
    if digits.len() <= 1 {
        return String::new();
    }
    format_digits(&digits)
}

/// Номер введён полностью
pub fn is_complete_phone(text: &str) -> bool {
    normalize_digits(text).len() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_full() {
        assert_eq!(format_phone("89123456789"), "+7 (912) 345-67-89");
        assert_eq!(format_phone("79123456789"), "+7 (912) 345-67-89");
        assert_eq!(format_phone("9123456789"), "+7 (912) 345-67-89");
        assert_eq!(format_phone("8 (912) 345 67 89"), "+7 (912) 345-67-89");
    }

    #[test]
    fn test_extra_digits_dropped() {
        assert_eq!(format_phone("8912345678900"), "+7 (912) 345-67-89");
    }

    #[test]
    fn test_partial() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("8"), "+7");
        assert_eq!(format_phone("+79"), "+7 (9");
        assert_eq!(format_phone("7912"), "+7 (912");
        assert_eq!(format_phone("79123"), "+7 (912) 3");
        assert_eq!(format_phone("7912345"), "+7 (912) 345");
        assert_eq!(format_phone("79123456"), "+7 (912) 345-6");
        assert_eq!(format_phone("791234567"), "+7 (912) 345-67");
        assert_eq!(format_phone("+7912345678"), "+7 (912) 345-67-8");
    }

    #[test]
    fn test_idempotent() {
        for value in ["+7 (912) 345-67-89", "+7 (912) 3", "+7", "+7 (9"] {
            assert_eq!(format_phone(value), value);
        }
    }

    #[test]
    fn test_keystroke_sequence() {
        let mut value = String::new();
        for key in "89123456789".chars() {
            let typed = format!("{}{}", value, key);
            value = apply_phone_edit(&value, &typed, PhoneEdit::Insert);
        }
        assert_eq!(value, "+7 (912) 345-67-89");
    }

    #[test]
    fn test_backspace_over_mask_characters() {
        // Удалён пробел после скобки: цифры не изменились, убираем последнюю
        assert_eq!(apply_phone_edit("+7 (912) 3", "+7 (912)3", PhoneEdit::Delete), "+7 (912");
        // Удалена цифра
        assert_eq!(apply_phone_edit("+7 (912) 3", "+7 (912) ", PhoneEdit::Delete), "+7 (912");
        assert_eq!(apply_phone_edit("+7 (9", "+7 (", PhoneEdit::Delete), "");
        assert_eq!(apply_phone_edit("+7", "+", PhoneEdit::Delete), "");
    }

    #[test]
    fn test_ten_digits_without_country_code() {
        // Вставка или автозаполнение: значение известно целиком
        assert_eq!(format_phone("8123456789"), "+7 (812) 345-67-89");
        assert_eq!(format_phone("7123456789"), "+7 (712) 345-67-89");
        assert_eq!(format_phone("(812) 345-67-89"), "+7 (812) 345-67-89");
        assert_eq!(
            apply_phone_edit("", "(812) 345-67-89", PhoneEdit::Insert),
            "+7 (812) 345-67-89"
        );
        // Вставка в поле, где уже стоит код страны
        assert_eq!(
            apply_phone_edit("+7", "+78123456789", PhoneEdit::Insert),
            "+7 (812) 345-67-89"
        );
    }

    #[test]
    fn test_delete_country_code_keeps_number() {
        assert_eq!(
            apply_phone_edit("+7 (912) 345-67-89", "+ (912) 345-67-89", PhoneEdit::Delete),
            "+7 (912) 345-67-89"
        );
        assert_eq!(
            apply_phone_edit("+7 (812) 345-67-89", "+ (812) 345-67-89", PhoneEdit::Delete),
            "+7 (812) 345-67-89"
        );
        // Обычный Backspace в конце номера
        assert_eq!(
            apply_phone_edit("+7 (912) 345-67-89", "+7 (912) 345-67-8", PhoneEdit::Delete),
            "+7 (912) 345-67-8"
        );
    }

    #[test]
    fn test_edit_from_input_type() {
        assert_eq!(PhoneEdit::from_input_type(Some("deleteContentBackward")), PhoneEdit::Delete);
        assert_eq!(PhoneEdit::from_input_type(Some("deleteByCut")), PhoneEdit::Delete);
        assert_eq!(PhoneEdit::from_input_type(Some("insertText")), PhoneEdit::Insert);
        assert_eq!(PhoneEdit::from_input_type(Some("insertFromPaste")), PhoneEdit::Insert);
        // Синтетическое событие без inputType
        assert_eq!(PhoneEdit::from_input_type(None), PhoneEdit::Insert);
    }

    #[test]
    fn test_is_complete_phone() {
        assert!(is_complete_phone("+7 (912) 345-67-89"));
        assert!(!is_complete_phone("+7 (912) 345-67"));
        assert!(!is_complete_phone(""));
    }
}
