//! Общие типы и чистая логика витрины: фильтр каталога с пагинацией, маска телефона,
//! правила формы обратной связи, аудит доступности и конфигурация сайта.
//!
//! Крейт не зависит от браузера и тестируется нативно.

pub mod shared;
