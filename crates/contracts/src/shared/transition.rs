//! Состояние анимации появления карточки: `Hidden → Entering → Visible`.
//!
//! Каждый вызов [`Transition::hide`] или [`Transition::enter`] начинает новое поколение.
//! Завершение анимации принимается только для билета текущего поколения, поэтому
//! запоздавший кадр от предыдущего клика по фильтру ничего не меняет.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
}

/// Билет на завершение конкретного запуска анимации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    phase: TransitionPhase,
    generation: u64,
}

impl Transition {
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Скрыть элемент и отменить незавершённое появление
    pub fn hide(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = TransitionPhase::Hidden;
    }

    /// Начать появление. Возвращает билет, которым его нужно завершить.
    pub fn enter(&mut self) -> TransitionTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = TransitionPhase::Entering;
        TransitionTicket {
            generation: self.generation,
        }
    }

    /// Завершить появление. `false` для устаревшего билета.
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        if ticket.generation != self.generation || self.phase != TransitionPhase::Entering {
            return false;
        }
        self.phase = TransitionPhase::Visible;
        true
    }
}
