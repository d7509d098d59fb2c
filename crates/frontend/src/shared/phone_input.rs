use crate::shared::dom::listen;
use contracts::shared::phone_mask::{apply_phone_edit, format_phone, PhoneEdit};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, InputEvent};

/// Маска `+7 (XXX) XXX-XX-XX` для телефонных полей
pub fn init_phone_inputs(inputs: Vec<HtmlInputElement>) {
    for input in inputs {
        bind_phone_input(input);
    }
}

fn bind_phone_input(input: HtmlInputElement) {
    // Автозаполнение браузера могло оставить значение без маски
    let initial = format_phone(&input.value());
    input.set_value(&initial);
    let previous = Rc::new(RefCell::new(initial));

    let target = input.clone();
    let last = previous.clone();
    // Автозаполнение и скрипты присылают обычный `Event` без `inputType`
    listen(&input, "input", move |e: Event| {
        let input_type = e.dyn_ref::<InputEvent>().map(InputEvent::input_type);
        let edit = PhoneEdit::from_input_type(input_type.as_deref());
        let formatted = apply_phone_edit(&last.borrow(), &target.value(), edit);
        if formatted != target.value() {
            target.set_value(&formatted);
        }
        *last.borrow_mut() = formatted;
    });

    // Одинокий код страны без номера не оставляем
    let target = input.clone();
    listen(&input, "blur", move |_: Event| {
        if target.value() == "+7" {
            target.set_value("");
            *previous.borrow_mut() = String::new();
        }
    });
}
