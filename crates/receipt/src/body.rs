//! Receipt data and body assembly

use crate::config::Letterhead;
use br_text::{
    ascii_fold, format_currency, format_date_long, format_service_dates, normalize_cpf, DateLocale,
};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Maximum number of dates stacked in one column of the date block
pub const DATES_PER_COLUMN: usize = 3;

/// One receipt's worth of data, extracted from a flagged spreadsheet row
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub name: String,
    /// Raw CPF as typed in the spreadsheet; validated during body assembly
    pub cpf: String,
    pub value: f64,
    pub service_dates: Vec<NaiveDate>,
    /// Empty spreadsheet cell means "sign today"
    pub signature_date: Option<NaiveDate>,
}

impl Receipt {
    /// Signature date, defaulting to the current date when absent
    pub fn resolved_signature_date(&self) -> NaiveDate {
        self.signature_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// The three text pieces that fill the receipt page
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptBody {
    /// Justified paragraph naming client, CPF and value
    pub narrative: String,
    /// Date block, one string per column, entries terminated by `;`
    pub date_columns: Vec<String>,
    /// "location, signature date." line
    pub trailer: String,
}

impl ReceiptBody {
    /// Validate and format every field, then assemble the page text
    ///
    /// Fails when the CPF does not reduce to exactly 11 digits.
    pub fn build(
        receipt: &Receipt,
        letterhead: &Letterhead,
        locale: &DateLocale,
    ) -> br_text::Result<Self> {
        let cpf = normalize_cpf(&receipt.cpf)?;
        let value = format_currency(receipt.value);
        let dates = format_service_dates(&receipt.service_dates, locale);
        let signature = format_date_long(receipt.resolved_signature_date(), locale);

        debug!(cpf = %cpf, value = %value, dates = dates.len(), "receipt fields formatted");

        let narrative = format!(
            "Recebi de {}, inscrito(a) no CPF sob o n. {}, a importância de R$ {} \
             referente aos serviços de atendimento psicológico, ocorrido(s) na \
             modalidade online na(s) seguinte(s) data(s):",
            receipt.name, cpf, value
        );
        let trailer = format!("{}, {}.", letterhead.location, signature);

        Ok(Self {
            narrative,
            date_columns: layout_date_columns(&dates),
            trailer,
        })
    }
}

/// Group formatted dates into columns of at most `DATES_PER_COLUMN` entries
///
/// Columns fill top-to-bottom, then left-to-right. An empty list still
/// produces one (empty) column so the renderer never sees a zero-width block.
fn layout_date_columns(dates: &[String]) -> Vec<String> {
    let columns = dates.len().div_ceil(DATES_PER_COLUMN).max(1);
    let mut out = vec![String::new(); columns];

    for (i, date) in dates.iter().enumerate() {
        let column = &mut out[i / DATES_PER_COLUMN];
        column.push_str(date);
        column.push_str(";\n");
    }

    out
}

/// Derive the output PDF filename from the client name
///
/// The name is transliterated to ASCII, spaces become underscores, and
/// anything that is not alphanumeric, underscore, space, newline or period
/// is stripped.
///
/// # Examples
/// ```
/// use receipt::receipt_filename;
/// assert_eq!(receipt_filename("Ana Silva"), "recibo_Ana_Silva.pdf");
/// assert_eq!(receipt_filename("José d'Ávila"), "recibo_Jose_dAvila.pdf");
/// ```
pub fn receipt_filename(name: &str) -> String {
    let folded = ascii_fold(name).replace(' ', "_");
    let kept: String = folded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '\n' | '.'))
        .collect();

    format!("recibo_{kept}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_text::PT_BR;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_receipt(n_dates: usize) -> Receipt {
        Receipt {
            name: "Ana Silva".to_string(),
            cpf: "123.456.789-09".to_string(),
            value: 150.5,
            service_dates: (0..n_dates).map(|i| date(2024, 3, 1 + i as u32)).collect(),
            signature_date: Some(date(2024, 4, 2)),
        }
    }

    #[test]
    fn test_narrative_embeds_formatted_fields() {
        let body =
            ReceiptBody::build(&sample_receipt(2), &Letterhead::default(), &PT_BR).unwrap();

        assert!(body.narrative.starts_with("Recebi de Ana Silva"));
        assert!(body.narrative.contains("123.456.789-09"));
        assert!(body.narrative.contains("R$ 150,50"));
    }

    #[test]
    fn test_trailer_combines_location_and_date() {
        let body =
            ReceiptBody::build(&sample_receipt(0), &Letterhead::default(), &PT_BR).unwrap();
        assert_eq!(body.trailer, "MyCity-State, 02 de abril de 2024.");
    }

    #[test]
    fn test_invalid_cpf_aborts_build() {
        let mut receipt = sample_receipt(1);
        receipt.cpf = "111.222.333".to_string();
        let err = ReceiptBody::build(&receipt, &Letterhead::default(), &PT_BR).unwrap_err();
        assert!(err.to_string().contains("9 digits"));
    }

    #[test]
    fn test_column_count_is_ceil_of_thirds() {
        for (n_dates, expected_columns) in
            [(0, 1), (1, 1), (2, 1), (3, 1), (4, 2), (6, 2), (7, 3)]
        {
            let body =
                ReceiptBody::build(&sample_receipt(n_dates), &Letterhead::default(), &PT_BR)
                    .unwrap();
            assert_eq!(
                body.date_columns.len(),
                expected_columns,
                "wrong column count for {n_dates} dates"
            );
        }
    }

    #[test]
    fn test_columns_fill_top_to_bottom_then_left_to_right() {
        let body =
            ReceiptBody::build(&sample_receipt(4), &Letterhead::default(), &PT_BR).unwrap();

        assert_eq!(
            body.date_columns[0],
            "01 de março de 2024;\n02 de março de 2024;\n03 de março de 2024;\n"
        );
        assert_eq!(body.date_columns[1], "04 de março de 2024;\n");
    }

    #[test]
    fn test_empty_date_list_keeps_one_column() {
        let body =
            ReceiptBody::build(&sample_receipt(0), &Letterhead::default(), &PT_BR).unwrap();
        assert_eq!(body.date_columns, vec![String::new()]);
    }

    #[test]
    fn test_each_column_holds_at_most_three() {
        let body =
            ReceiptBody::build(&sample_receipt(8), &Letterhead::default(), &PT_BR).unwrap();
        for column in &body.date_columns {
            assert!(column.lines().count() <= DATES_PER_COLUMN);
        }
    }

    #[test]
    fn test_filename_plain_name() {
        assert_eq!(receipt_filename("Ana Silva"), "recibo_Ana_Silva.pdf");
    }

    #[test]
    fn test_filename_strips_accents_and_punctuation() {
        assert_eq!(
            receipt_filename("João da Conceição"),
            "recibo_Joao_da_Conceicao.pdf"
        );
        assert_eq!(receipt_filename("Maria (Mari)"), "recibo_Maria_Mari.pdf");
    }

    #[test]
    fn test_explicit_signature_date_wins_over_today() {
        let receipt = sample_receipt(0);
        assert_eq!(receipt.resolved_signature_date(), date(2024, 4, 2));
    }
}
