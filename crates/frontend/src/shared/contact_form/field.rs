use contracts::shared::contact_form::{error_element_id, FieldKind, ValidityFlags};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ValidityState,
};

#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

/// Поле формы: `input`, `select` или `textarea` и его позиция в форме
#[derive(Clone)]
pub struct FormField {
    control: Control,
    position: usize,
}

impl FormField {
    pub fn from_element(element: Element, position: usize) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::new(Control::Input(input), position)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::new(Control::Select(select), position)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .ok()
            .map(|textarea| Self::new(Control::TextArea(textarea), position))
    }

    fn new(control: Control, position: usize) -> Self {
        Self { control, position }
    }

    pub fn element(&self) -> &HtmlElement {
        match &self.control {
            Control::Input(el) => el,
            Control::Select(el) => el,
            Control::TextArea(el) => el,
        }
    }

    pub fn kind(&self) -> FieldKind {
        let element = self.element();
        FieldKind::detect(&element.tag_name(), element.get_attribute("type").as_deref())
    }

    pub fn value(&self) -> String {
        match &self.control {
            Control::Input(el) => el.value(),
            Control::Select(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }

    pub fn required(&self) -> bool {
        self.element().has_attribute("required")
    }

    fn validity(&self) -> ValidityState {
        match &self.control {
            Control::Input(el) => el.validity(),
            Control::Select(el) => el.validity(),
            Control::TextArea(el) => el.validity(),
        }
    }

    /// Нативная проверка браузера пройдена
    pub fn is_valid(&self) -> bool {
        self.validity().valid()
    }

    pub fn validity_flags(&self) -> ValidityFlags {
        let validity = self.validity();
        ValidityFlags {
            value_missing: validity.value_missing(),
            type_mismatch: validity.type_mismatch(),
        }
    }

    /// У поля есть хотя бы одна связанная `<label>`
    pub fn has_label(&self) -> bool {
        let labels = match &self.control {
            Control::Input(el) => el.labels(),
            Control::Select(el) => Some(el.labels()),
            Control::TextArea(el) => Some(el.labels()),
        };
        labels.map(|l| l.length() > 0).unwrap_or(false)
    }

    /// Id элемента с сообщением об ошибке этого поля
    pub fn error_id(&self) -> String {
        let element = self.element();
        error_element_id(
            &element.id(),
            element.get_attribute("name").as_deref(),
            self.position,
        )
    }
}
