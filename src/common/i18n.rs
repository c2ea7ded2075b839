// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "pt"];

const EN: &[(&str, &str)] = &[
    ("dashboard_unavailable", "Failed to load the dashboard. Please try again later."),
    ("database_error", "An unexpected database error occurred."),
    ("internal_error", "An unexpected error occurred."),
];

const PT: &[(&str, &str)] = &[
    ("dashboard_unavailable", "Não foi possível carregar o dashboard. Tente novamente mais tarde."),
    ("database_error", "Ocorreu um erro inesperado no banco de dados."),
    ("internal_error", "Ocorreu um erro inesperado."),
];

/// Tabelas de mensagens de erro por idioma, carregadas uma vez no `AppState`.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let messages: HashMap<_, HashMap<_, _>> = [("en", EN), ("pt", PT)]
            .into_iter()
            .map(|(lang, table)| (lang, table.iter().copied().collect::<HashMap<_, _>>()))
            .collect();
        Self { messages }
    }

    // Idioma desconhecido ou chave ausente caem para o inglês; chave inexistente volta ela mesma.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.messages.get(lang)?.get(key).copied()
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
