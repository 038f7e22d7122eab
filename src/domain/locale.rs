#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LocaleError(String);

impl std::fmt::Display for LocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale \"{}\" (expected \"en\" or \"ru\")", self.0)
    }
}

impl std::error::Error for LocaleError {}

impl Locale {
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "" | "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(LocaleError(tag.to_string())),
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Locale::En => "Hello from Rust",
            Locale::Ru => "Привет из Rust",
        }
    }

    pub fn missing_input(self) -> &'static str {
        match self {
            Locale::En => "No input data",
            Locale::Ru => "Нет входных данных",
        }
    }

    pub fn parse_failure(self, detail: &str) -> String {
        let prefix = match self {
            Locale::En => "JSON parse error",
            Locale::Ru => "Ошибка парсинга JSON",
        };
        format!("{prefix}: {detail}")
    }
}
