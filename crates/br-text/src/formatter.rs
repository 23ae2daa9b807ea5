//! Date and currency formatting for the pt-BR locale

use chrono::{Datelike, NaiveDate};

/// Portuguese month names (lowercase, unabbreviated)
const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Month-name table for date formatting
///
/// Passed explicitly to the formatting functions instead of mutating any
/// process-wide locale state.
#[derive(Debug, Clone, Copy)]
pub struct DateLocale {
    pub months: [&'static str; 12],
}

/// The Brazilian-Portuguese locale
pub const PT_BR: DateLocale = DateLocale {
    months: PT_BR_MONTHS,
};

/// Format a date in the long pt-BR form
///
/// # Examples
/// ```
/// use br_text::{format_date_long, PT_BR};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2020, 12, 21).unwrap();
/// assert_eq!(format_date_long(date, &PT_BR), "21 de dezembro de 2020");
/// ```
pub fn format_date_long(date: NaiveDate, locale: &DateLocale) -> String {
    let month_name = locale.months[date.month0() as usize];
    format!("{:02} de {} de {}", date.day(), month_name, date.year())
}

/// Format every service date in the long pt-BR form, preserving order
pub fn format_service_dates(dates: &[NaiveDate], locale: &DateLocale) -> Vec<String> {
    dates.iter().map(|d| format_date_long(*d, locale)).collect()
}

/// Format a currency value with two decimals and the comma separator
///
/// # Examples
/// ```
/// use br_text::format_currency;
/// assert_eq!(format_currency(150.5), "150,50");
/// assert_eq!(format_currency(-3.0), "-3,00");
/// ```
pub fn format_currency(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long(date(2024, 3, 1), &PT_BR), "01 de março de 2024");
        assert_eq!(format_date_long(date(2024, 1, 31), &PT_BR), "31 de janeiro de 2024");
        assert_eq!(format_date_long(date(2020, 12, 21), &PT_BR), "21 de dezembro de 2020");
    }

    #[test]
    fn test_format_date_long_pads_day() {
        assert_eq!(format_date_long(date(2024, 8, 7), &PT_BR), "07 de agosto de 2024");
    }

    #[test]
    fn test_format_service_dates_preserves_order() {
        let dates = [date(2024, 3, 22), date(2024, 3, 1), date(2024, 3, 8)];
        let formatted = format_service_dates(&dates, &PT_BR);
        assert_eq!(
            formatted,
            vec![
                "22 de março de 2024",
                "01 de março de 2024",
                "08 de março de 2024",
            ]
        );
    }

    #[test]
    fn test_format_service_dates_empty() {
        assert!(format_service_dates(&[], &PT_BR).is_empty());
    }

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(150.5), "150,50");
        assert_eq!(format_currency(0.0), "0,00");
        assert_eq!(format_currency(1234.0), "1234,00");
        assert_eq!(format_currency(99.999), "100,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-100.5), "-100,50");
    }

    #[test]
    fn test_format_currency_pattern() {
        for value in [0.0, 1.5, 150.5, 1234.56, -3.0] {
            let s = format_currency(value);
            let (int_part, frac_part) = s.split_once(',').unwrap();
            assert!(int_part.trim_start_matches('-').chars().all(|c| c.is_ascii_digit()));
            assert_eq!(frac_part.len(), 2);
        }
    }

    #[test]
    fn test_format_currency_round_trips() {
        for value in [150.5, 0.004, 99.995, -12.345] {
            let s = format_currency(value).replace(',', ".");
            let parsed: f64 = s.parse().unwrap();
            assert!((parsed - (value * 100.0).round() / 100.0).abs() < 1e-9);
        }
    }
}
