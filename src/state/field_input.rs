// ============================================================================
// FIELD INPUT - Estado del input controlado reutilizable
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::utils::constants::PUBLISHED_DATE_FIELD;

/// Propiedades del input (label, tipo, nombre, valor externo, disabled)
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldInputProps {
    pub label: String,
    pub required: bool,
    pub input_type: String,
    pub name: Option<String>,
    pub value: Option<String>,
    pub disabled: bool,
}

impl FieldInputProps {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            required: true,
            input_type: "text".to_string(),
            name: None,
            value: None,
            disabled: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn input_type(mut self, input_type: &str) -> Self {
        self.input_type = input_type.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Atributo name del input: el nombre explícito o el label en minúsculas
    pub fn field_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.label.to_lowercase())
    }
}

/// Valor mostrado por el input
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldInputState {
    name: Option<String>,
    display: String,
}

impl FieldInputState {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            display: String::new(),
        }
    }

    pub fn from_props(props: &FieldInputProps) -> Self {
        let mut state = Self::new(props.name.as_deref());
        state.receive_value(props.value.as_deref());
        state
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Valor externo: vacío o ausente no cambia lo mostrado
    pub fn receive_value(&mut self, value: Option<&str>) {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => return,
        };

        self.display = if self.name.as_deref() == Some(PUBLISHED_DATE_FIELD) {
            format_calendar_date(value).unwrap_or_else(|| {
                log::warn!("⚠️ [INPUT] Fecha no reconocida: {}", value);
                value.to_string()
            })
        } else {
            value.to_string()
        };
    }

    /// Cada tecla: primero el callback externo, luego el valor mostrado
    pub fn keystroke(&mut self, value: &str, on_change: Option<&dyn Fn(&str)>) {
        if let Some(callback) = on_change {
            callback(value);
        }
        self.display = value.to_string();
    }
}

/// Fecha-hora con offset explícito (`Z` se normaliza a `+00:00`)
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
];

/// Fecha-hora sin offset: se interpreta como UTC
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Formatea una fecha como YYYY-MM-DD (UTC)
///
/// Acepta las formas ISO que entiende un navegador: `YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD` y fecha-hora con minutos, segundos o fracción, con o sin
/// `Z`/offset.
pub fn format_calendar_date(value: &str) -> Option<String> {
    let value = value.trim();
    let date = parse_calendar_date(value)?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    parse_year_month(value)
}

/// `YYYY` o `YYYY-MM` (día 1 del mes)
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year = parts.next().filter(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn starts_with_empty_display() {
        let state = FieldInputState::new(Some("title"));
        assert_eq!(state.display(), "");
    }

    #[test]
    fn plain_values_are_shown_verbatim() {
        let mut state = FieldInputState::new(Some("title"));
        state.receive_value(Some("2024-03-05T10:00:00Z"));
        assert_eq!(state.display(), "2024-03-05T10:00:00Z");
    }

    #[test]
    fn published_date_is_reformatted() {
        let mut state = FieldInputState::new(Some("published_date"));
        state.receive_value(Some("2024-03-05T23:30:00-02:00"));
        assert_eq!(state.display(), "2024-03-06");

        state.receive_value(Some("1999-12-31"));
        assert_eq!(state.display(), "1999-12-31");
    }

    #[test]
    fn unparsable_published_date_is_kept() {
        let mut state = FieldInputState::new(Some("published_date"));
        state.receive_value(Some("soon"));
        assert_eq!(state.display(), "soon");
    }

    #[test]
    fn empty_external_value_is_ignored() {
        let mut state = FieldInputState::new(None);
        state.receive_value(Some("draft"));
        state.receive_value(Some(""));
        state.receive_value(None);
        assert_eq!(state.display(), "draft");
    }

    #[test]
    fn keystroke_runs_callback_then_updates_display() {
        let seen = RefCell::new(Vec::new());
        let callback = |value: &str| seen.borrow_mut().push(value.to_string());

        let mut state = FieldInputState::new(None);
        state.keystroke("a", Some(&callback));
        state.keystroke("ab", Some(&callback));
        state.keystroke("abc", None);

        assert_eq!(*seen.borrow(), vec!["a", "ab"]);
        assert_eq!(state.display(), "abc");
    }

    #[test]
    fn props_default_name_is_lowercase_label() {
        let props = FieldInputProps::new("Token");
        assert_eq!(props.field_name(), "token");
        assert!(props.required);
        assert_eq!(props.input_type, "text");
        assert!(!props.disabled);

        let props = FieldInputProps::new("Published")
            .name("published_date")
            .value("2020-01-02T00:00:00Z");
        assert_eq!(props.field_name(), "published_date");
        assert_eq!(FieldInputState::from_props(&props).display(), "2020-01-02");
    }

    #[test]
    fn calendar_date_accepts_fractional_seconds() {
        assert_eq!(
            format_calendar_date("2021-07-04T08:15:30.250").as_deref(),
            Some("2021-07-04")
        );
        assert_eq!(format_calendar_date("07/04/2021"), None);
    }

    #[test]
    fn calendar_date_accepts_minutes_only_times() {
        assert_eq!(format_calendar_date("2024-03-05T10:00Z").as_deref(), Some("2024-03-05"));
        assert_eq!(format_calendar_date("2024-03-05T10:00").as_deref(), Some("2024-03-05"));
        assert_eq!(
            format_calendar_date("2024-03-05T23:30-05:00").as_deref(),
            Some("2024-03-06")
        );
    }

    #[test]
    fn calendar_date_converts_offsets_to_utc() {
        assert_eq!(
            format_calendar_date("2024-03-05T01:15:00+02:00").as_deref(),
            Some("2024-03-04")
        );
        assert_eq!(
            format_calendar_date("2024-03-05T01:15:00.5+02:00").as_deref(),
            Some("2024-03-04")
        );
    }

    #[test]
    fn calendar_date_accepts_year_and_year_month() {
        assert_eq!(format_calendar_date("2024-07").as_deref(), Some("2024-07-01"));
        assert_eq!(format_calendar_date("2024").as_deref(), Some("2024-01-01"));
        assert_eq!(format_calendar_date("2024-13"), None);
        assert_eq!(format_calendar_date("24"), None);
    }
}
