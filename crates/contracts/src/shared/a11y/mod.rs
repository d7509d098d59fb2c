//! Ручные проверки доступности страницы.
//!
//! Проверки работают по [`PageSnapshot`], который фронтенд снимает с живого DOM.
//! Отчёт состоит из шести разделов в фиксированном порядке; раздел без замечаний
//! содержит одну положительную строку.

pub mod snapshot;

pub use snapshot::{
    heading_level, FieldSnapshot, FocusableSnapshot, FormSnapshot, NavSnapshot, PageSnapshot,
};

use serde::{Deserialize, Serialize};

/// Семантические элементы, которые должны присутствовать на странице
pub const SEMANTIC_ELEMENTS: [&str; 7] =
    ["header", "nav", "main", "footer", "section", "article", "aside"];

pub const REPORT_TITLE: &str = "🔍 Accessibility Audit Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditCategory {
    Semantics,
    Navigation,
    Forms,
    ColorContrast,
    Keyboard,
    Focus,
}

impl AuditCategory {
    /// Название раздела отчёта
    pub fn display_name(&self) -> &'static str {
        match self {
            AuditCategory::Semantics => "Семантика",
            AuditCategory::Navigation => "Навигация",
            AuditCategory::Forms => "Формы",
            AuditCategory::ColorContrast => "Цвет и контраст",
            AuditCategory::Keyboard => "Клавиатура",
            AuditCategory::Focus => "Фокус",
        }
    }

    /// Строка для раздела без замечаний
    fn passed_message(&self) -> &'static str {
        match self {
            AuditCategory::Semantics => "✅ Семантическая разметка корректна",
            AuditCategory::Navigation => "✅ Навигация доступна",
            AuditCategory::Forms => "✅ Формы доступны",
            AuditCategory::ColorContrast => "✅ Контрастность проверена",
            AuditCategory::Keyboard => "✅ Клавиатурная навигация доступна",
            AuditCategory::Focus => "✅ Управление фокусом настроено",
        }
    }

    /// Все разделы в порядке отчёта
    pub fn all() -> [AuditCategory; 6] {
        [
            AuditCategory::Semantics,
            AuditCategory::Navigation,
            AuditCategory::Forms,
            AuditCategory::ColorContrast,
            AuditCategory::Keyboard,
            AuditCategory::Focus,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    Passed,
    Issues,
    /// Проверка требует ручной работы с инструментами разработчика
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSection {
    pub category: AuditCategory,
    pub status: SectionStatus,
    pub findings: Vec<String>,
}

impl AuditSection {
    fn from_issues(category: AuditCategory, issues: Vec<String>) -> Self {
        if issues.is_empty() {
            Self {
                category,
                status: SectionStatus::Passed,
                findings: vec![category.passed_message().to_string()],
            }
        } else {
            Self {
                category,
                status: SectionStatus::Issues,
                findings: issues,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub sections: Vec<AuditSection>,
}

impl AuditReport {
    pub fn section(&self, category: AuditCategory) -> Option<&AuditSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Количество найденных проблем во всех разделах
    pub fn issue_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.status == SectionStatus::Issues)
            .map(|s| s.findings.len())
            .sum()
    }
}

/// Выполняет все проверки по снимку страницы
pub fn audit(snapshot: &PageSnapshot) -> AuditReport {
    let sections = AuditCategory::all()
        .into_iter()
        .map(|category| match category {
            AuditCategory::Semantics => {
                AuditSection::from_issues(category, check_semantics(snapshot))
            }
            AuditCategory::Navigation => {
                AuditSection::from_issues(category, check_navigation(snapshot))
            }
            AuditCategory::Forms => AuditSection::from_issues(category, check_forms(snapshot)),
            AuditCategory::ColorContrast => AuditSection {
                category,
                status: SectionStatus::Manual,
                findings: vec!["⚠️ Проверьте контрастность вручную с помощью DevTools".to_string()],
            },
            AuditCategory::Keyboard => {
                AuditSection::from_issues(category, check_keyboard(snapshot))
            }
            AuditCategory::Focus => AuditSection::from_issues(category, check_focus(snapshot)),
        })
        .collect();

    AuditReport { sections }
}

// ── Проверки ─────────────────────────────────────────────────────────────────

fn check_semantics(snapshot: &PageSnapshot) -> Vec<String> {
    let mut issues = Vec::new();

    // Уровень заголовка не должен прыгать вниз больше чем на один шаг
    if snapshot
        .heading_levels
        .windows(2)
        .any(|pair| pair[1] > pair[0] + 1)
    {
        issues.push("Некорректная иерархия заголовков".to_string());
    }

    for tag in SEMANTIC_ELEMENTS {
        if !snapshot.landmarks.iter().any(|l| l == tag) {
            issues.push(format!("Отсутствует семантический элемент <{}>", tag));
        }
    }

    issues
}

fn check_navigation(snapshot: &PageSnapshot) -> Vec<String> {
    let mut issues = Vec::new();

    if !snapshot.has_skip_link {
        issues.push("Отсутствует skip-link для навигации с клавиатуры".to_string());
    }

    for (index, nav) in snapshot.navs.iter().enumerate() {
        if !nav.labelled {
            issues.push(format!(
                "Навигация #{} без метки для скринридеров",
                index + 1
            ));
        }
    }

    issues
}

fn check_forms(snapshot: &PageSnapshot) -> Vec<String> {
    let mut issues = Vec::new();

    for (index, form) in snapshot.forms.iter().enumerate() {
        for field in &form.fields {
            if !field.has_label && !field.hidden {
                issues.push(format!("Поле ввода без метки в форме #{}", index + 1));
            }
            if field.required && !field.aria_required {
                issues.push(format!(
                    "Обязательное поле без aria-required в форме #{}",
                    index + 1
                ));
            }
        }
    }

    issues
}

fn check_keyboard(snapshot: &PageSnapshot) -> Vec<String> {
    snapshot
        .focusables
        .iter()
        .filter(|el| el.rendered)
        .filter(|el| matches!(el.tabindex_attr, Some(attr) if attr < 0) && el.tab_index >= 0)
        .map(|_| "Элемент с tabindex=\"-1\" может получить фокус".to_string())
        .collect()
}

fn check_focus(snapshot: &PageSnapshot) -> Vec<String> {
    match snapshot.root_outline_style.as_deref() {
        Some("none") => vec!["Возможно отключены стили фокуса".to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_page() -> PageSnapshot {
        PageSnapshot {
            heading_levels: vec![1, 2, 3, 2, 3],
            landmarks: SEMANTIC_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            has_skip_link: true,
            navs: vec![NavSnapshot { labelled: true }],
            forms: vec![FormSnapshot {
                fields: vec![FieldSnapshot {
                    has_label: true,
                    hidden: false,
                    required: true,
                    aria_required: true,
                }],
            }],
            focusables: vec![FocusableSnapshot {
                rendered: true,
                tabindex_attr: Some(-1),
                tab_index: -1,
            }],
            root_outline_style: Some("auto".to_string()),
        }
    }

    #[test]
    fn test_report_has_six_ordered_sections() {
        let report = audit(&complete_page());
        let names = report
            .sections
            .iter()
            .map(|s| s.category.display_name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Семантика", "Навигация", "Формы", "Цвет и контраст", "Клавиатура", "Фокус"]
        );
    }

    #[test]
    fn test_clean_page_passes() {
        let report = audit(&complete_page());
        assert_eq!(report.issue_count(), 0);
        let semantics = report.section(AuditCategory::Semantics).unwrap();
        assert_eq!(semantics.status, SectionStatus::Passed);
        assert_eq!(semantics.findings, vec!["✅ Семантическая разметка корректна"]);
        assert_eq!(
            report.section(AuditCategory::ColorContrast).unwrap().status,
            SectionStatus::Manual
        );
    }

    #[test]
    fn test_semantic_issues() {
        let mut page = complete_page();
        page.heading_levels = vec![1, 3, 5];
        page.landmarks = vec!["header".into(), "main".into()];
        let report = audit(&page);
        let findings = &report.section(AuditCategory::Semantics).unwrap().findings;
        assert_eq!(findings[0], "Некорректная иерархия заголовков");
        // Иерархия отмечается один раз, плюс пять недостающих элементов
        assert_eq!(findings.len(), 6);
        assert!(findings.contains(&"Отсутствует семантический элемент <footer>".to_string()));
    }

    #[test]
    fn test_navigation_issues() {
        let mut page = complete_page();
        page.has_skip_link = false;
        page.navs = vec![NavSnapshot { labelled: true }, NavSnapshot { labelled: false }];
        let report = audit(&page);
        assert_eq!(
            report.section(AuditCategory::Navigation).unwrap().findings,
            vec![
                "Отсутствует skip-link для навигации с клавиатуры",
                "Навигация #2 без метки для скринридеров",
            ]
        );
    }

    #[test]
    fn test_form_issues() {
        let mut page = complete_page();
        page.forms.push(FormSnapshot {
            fields: vec![
                FieldSnapshot { has_label: false, hidden: true, ..Default::default() },
                FieldSnapshot { has_label: false, required: true, ..Default::default() },
            ],
        });
        let report = audit(&page);
        assert_eq!(
            report.section(AuditCategory::Forms).unwrap().findings,
            vec![
                "Поле ввода без метки в форме #2",
                "Обязательное поле без aria-required в форме #2",
            ]
        );
        assert_eq!(report.issue_count(), 2);
    }

    #[test]
    fn test_keyboard_and_focus_issues() {
        let mut page = complete_page();
        page.focusables.push(FocusableSnapshot {
            rendered: true,
            tabindex_attr: Some(-1),
            tab_index: 0,
        });
        page.focusables.push(FocusableSnapshot {
            rendered: false,
            tabindex_attr: Some(-1),
            tab_index: 0,
        });
        page.root_outline_style = Some("none".into());
        let report = audit(&page);
        assert_eq!(report.section(AuditCategory::Keyboard).unwrap().findings.len(), 1);
        assert_eq!(
            report.section(AuditCategory::Focus).unwrap().findings,
            vec!["Возможно отключены стили фокуса"]
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = audit(&PageSnapshot::default());
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AuditReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
