use crate::teams::{export_csv, export_json};
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub fn render(format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(export_csv()),
        ExportFormat::Json => export_json().context("Failed to serialize team reference table"),
    }
}

pub fn run(format: ExportFormat) -> Result<()> {
    println!("{}", render(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_csv() {
        let csv = render(ExportFormat::Csv).unwrap();
        assert!(csv.contains("\n147,\"New York Yankees\",NYY,#132448,\"AL East\"\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render(ExportFormat::Json).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"spotColor\": \"#005a9c\""));
    }
}
