//! Мелкие помощники для работы с DOM через web-sys

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement, NodeList};

/// Элементы из результата `querySelectorAll`, приводимые к типу `T`
pub fn collect<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Все элементы документа по селектору
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    collect(document.query_selector_all(selector))
}

/// Первый элемент документа по селектору
pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

/// Подписка на событие на всё время жизни страницы
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_class(element: &HtmlElement, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

/// Ширина окна в CSS-пикселях
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Вызов после того, как браузер отрисует текущие изменения стилей.
///
/// Двойной `requestAnimationFrame`: первый кадр фиксирует начальные стили,
/// во втором можно запускать CSS-переход.
pub fn next_paint(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let inner = Closure::once_into_js(callback);
    let outer_window = window.clone();
    let outer = Closure::once_into_js(move || {
        let _ = outer_window.request_animation_frame(inner.unchecked_ref());
    });
    let _ = window.request_animation_frame(outer.unchecked_ref());
}

/// Показ блокирующего сообщения пользователю
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
