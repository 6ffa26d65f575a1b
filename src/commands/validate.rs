use crate::teams::{validate_table, ValidationReport};
use anyhow::{bail, Result};

fn join_ids<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_report(report: &ValidationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Expected franchises: {}\nDefined entries:     {}\n",
        report.total_expected, report.total_defined
    ));
    output.push_str(&format!("Missing:             {}\n", join_ids(&report.missing)));
    output.push_str(&format!("Extra:               {}\n", join_ids(&report.extra)));
    output.push_str(&format!("Duplicate ids:       {}\n", join_ids(&report.duplicate_ids)));
    output.push_str(&format!(
        "Duplicate abbrevs:   {}\n",
        join_ids(&report.duplicate_abbreviations)
    ));
    output.push_str(&format!("Inconsistent colors: {}\n", join_ids(&report.inconsistent)));
    output.push_str(if report.is_valid() { "Result: OK\n" } else { "Result: FAILED\n" });
    output
}

pub fn run() -> Result<()> {
    let report = validate_table();
    print!("{}", format_report(&report));
    if !report.is_valid() {
        bail!("Team reference table is inconsistent");
    }
    Ok(())
}
