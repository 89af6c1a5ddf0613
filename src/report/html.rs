//! Printable HTML report
//!
//! The document mirrors the simulator's "download as PDF" output: a parameter
//! table, the figures at maturity and the yearly evolution, and it opens the
//! browser's print dialog on load.

use chrono::NaiveDate;

use crate::contract::SimulationParameters;
use crate::error::ProjectionError;
use crate::projection::ProjectionResult;
use super::format::{format_eur, format_percent};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; }
h1 { color: #1e40af; text-align: center; }
h2 { color: #1e3a8a; margin-top: 30px; }
table { margin-bottom: 20px; width: 100%; }
th { background-color: #f1f5f9; }
td, th { padding: 8px; text-align: left; }
tr:nth-child(even) { background-color: #f8fafc; }";

const TABLE_OPEN: &str =
    r#"<table border="1" cellpadding="5" style="border-collapse: collapse; width: 100%;">"#;

const DISCLAIMER: &str = "Document généré à titre informatif seulement. Les résultats sont des \
estimations et peuvent varier en fonction de nombreux facteurs.";

fn row(cells: &[String], tag: &str) -> String {
    let mut out = String::from("<tr>");
    for cell in cells {
        out.push_str(&format!("<{tag}>{cell}</{tag}>"));
    }
    out.push_str("</tr>\n");
    out
}

fn parameter_section(params: &SimulationParameters) -> String {
    let mut out = String::from("<h2>Paramètres de la simulation</h2>\n");
    out.push_str(TABLE_OPEN);
    out.push('\n');
    out.push_str(&row(&["Paramètre".to_string(), "Valeur".to_string()], "th"));

    let rows = [
        ("Versement initial", format_eur(params.initial_deposit)),
        ("Versement mensuel", format_eur(params.monthly_deposit)),
        ("Durée", format!("{} ans", params.duration_years)),
        ("Taux d'intérêt annuel", format_percent(params.annual_interest_rate_percent)),
        ("Frais d'entrée", format_percent(params.entry_fee_percent)),
        ("Frais de gestion", format_percent(params.management_fee_percent)),
    ];
    for (label, value) in rows {
        out.push_str(&row(&[label.to_string(), value], "td"));
    }
    out.push_str("</table>\n");
    out
}

fn summary_section(result: &ProjectionResult) -> Result<String, ProjectionError> {
    let summary = result.summary()?;

    let mut out = format!(
        "<h2>Résultats à l'échéance ({} ans)</h2>\n",
        summary.duration_years
    );
    out.push_str(TABLE_OPEN);
    out.push('\n');
    out.push_str(&row(&["Indicateur".to_string(), "Montant".to_string()], "th"));

    let rows = [
        ("Capital final", summary.final_capital),
        ("Versements nets", summary.net_contributions),
        ("Intérêts générés", summary.interest_generated),
        ("Frais d'entrée", summary.entry_fee_total),
    ];
    for (label, amount) in rows {
        out.push_str(&row(&[label.to_string(), format_eur(amount)], "td"));
    }
    out.push_str("</table>\n");
    Ok(out)
}

fn evolution_section(result: &ProjectionResult) -> String {
    let mut out = String::from("<h2>Évolution de l'épargne</h2>\n");
    out.push_str(TABLE_OPEN);
    out.push('\n');
    out.push_str(&row(
        &[
            "Année".to_string(),
            "Capital cumulé".to_string(),
            "Versements bruts".to_string(),
            "Frais d'entrée".to_string(),
            "Intérêts générés".to_string(),
        ],
        "th",
    ));

    for record in &result.yearly {
        out.push_str(&row(
            &[
                record.year.to_string(),
                format_eur(record.cumulative_capital),
                format_eur(record.gross_contributions),
                format_eur(record.entry_fee_total),
                format_eur(record.interest_generated),
            ],
            "td",
        ));
    }
    out.push_str("</table>\n");
    out
}

/// Render the full printable report
///
/// Fails with [`ProjectionError::EmptyProjection`] when the result has no
/// yearly records, since the maturity figures would not exist.
pub fn render_report(
    params: &SimulationParameters,
    result: &ProjectionResult,
    generated_on: NaiveDate,
) -> Result<String, ProjectionError> {
    let summary = summary_section(result)?;

    let mut body = String::from("<h1>Simulation d'assurance vie épargne</h1>\n");
    body.push_str(&parameter_section(params));
    body.push_str(&summary);
    body.push_str(&evolution_section(result));
    body.push_str(&format!("<p><em>{DISCLAIMER}</em></p>\n"));

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Simulation Assurance Vie - {date}</title>\n\
         <style>\n{STYLE}\n</style>\n</head>\n<body>\n{body}\
         <script>\nwindow.onload = function() {{ window.print(); }}\n</script>\n\
         </body>\n</html>\n",
        date = generated_on.format("%d/%m/%Y"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::report::format::round_money;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let params = SimulationParameters::default();
        let result = project(&params);
        let html = render_report(&params, &result, report_date()).unwrap();

        assert!(html.contains("<title>Simulation Assurance Vie - 09/03/2024</title>"));
        assert!(html.contains("<td>Versement initial</td><td>5\u{202f}000 €</td>"));
        assert!(html.contains("<td>Durée</td><td>20 ans</td>"));
        assert!(html.contains("<td>Taux d'intérêt annuel</td><td>2.5 %</td>"));
        assert!(html.contains("Résultats à l'échéance (20 ans)"));
        assert!(html.contains("<td>Frais d'entrée</td><td>1\u{202f}590 €</td>"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_report_has_row_per_year() {
        let params = SimulationParameters::default();
        let result = project(&params);
        let html = render_report(&params, &result, report_date()).unwrap();

        assert!(html.contains("<tr><td>1</td><td>"));
        assert!(html.contains("<td>7\u{202f}400 €</td><td>222 €</td>"));
        assert!(html.contains("<tr><td>20</td><td>"));
        assert!(!html.contains("<tr><td>21</td>"));
    }

    #[test]
    fn test_final_capital_matches_last_row() {
        let params = SimulationParameters::default();
        let result = project(&params);
        let html = render_report(&params, &result, report_date()).unwrap();

        let capital = format_eur(result.final_capital().unwrap());
        assert!(html.contains(&format!("<td>Capital final</td><td>{capital}</td>")));
        assert!(html.contains(&format!("<tr><td>20</td><td>{capital}</td>")));
    }

    #[test]
    fn test_large_capital_is_printed_in_full() {
        let params = SimulationParameters {
            annual_interest_rate_percent: 1000.0,
            duration_years: 40,
            ..Default::default()
        };
        let result = project(&params);
        let capital = result.final_capital().unwrap();
        assert!(capital > 1e100);

        let shown = format_eur(capital);
        let digits = format!("{:.0}", round_money(capital));
        assert_eq!(shown.replace('\u{202f}', ""), format!("{digits} €"));

        let html = render_report(&params, &result, report_date()).unwrap();
        assert!(html.contains(&format!("<td>Capital final</td><td>{shown}</td>")));
    }

    #[test]
    fn test_empty_projection_is_reported() {
        let params = SimulationParameters {
            duration_years: 0,
            ..Default::default()
        };
        let result = project(&params);

        assert!(matches!(
            render_report(&params, &result, report_date()),
            Err(ProjectionError::EmptyProjection { .. })
        ));
    }
}
