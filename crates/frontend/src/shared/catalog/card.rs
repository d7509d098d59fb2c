use crate::shared::dom::{next_paint, set_style};
use contracts::shared::transition::Transition;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::HtmlElement;

/// Карточка товара вместе с состоянием её анимации появления
#[derive(Clone)]
pub struct CardHandle {
    element: HtmlElement,
    transition: Rc<Cell<Transition>>,
}

impl CardHandle {
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            transition: Rc::new(Cell::new(Transition::default())),
        }
    }

    pub fn category(&self) -> Option<String> {
        self.element.get_attribute("data-category")
    }

    /// Показать карточку с анимацией или скрыть её
    pub fn set_shown(&self, shown: bool) {
        if shown {
            self.enter();
        } else {
            self.hide();
        }
    }

    fn hide(&self) {
        let mut transition = self.transition.get();
        transition.hide();
        self.transition.set(transition);
        set_style(&self.element, "display", "none");
    }

    fn enter(&self) {
        let mut transition = self.transition.get();
        let ticket = transition.enter();
        self.transition.set(transition);

        set_style(&self.element, "display", "");
        set_style(&self.element, "opacity", "0");
        set_style(&self.element, "transform", "translateY(20px)");
        set_style(
            &self.element,
            "transition",
            "opacity 0.3s ease, transform 0.3s ease",
        );

        let card = self.clone();
        next_paint(move || {
            let mut transition = card.transition.get();
            if !transition.complete(ticket) {
                // Карточку успели скрыть или показать заново
                return;
            }
            card.transition.set(transition);
            set_style(&card.element, "opacity", "1");
            set_style(&card.element, "transform", "translateY(0)");
        });
    }
}
