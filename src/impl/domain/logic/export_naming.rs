use chrono::NaiveDateTime;

use crate::entities::ExportFormat;

const EXPORT_FILE_PREFIX: &str = "Remitos";

/// `Remitos_YYYYMMDD_HHMMSS.<ext>` for the given (local) time.
pub(crate) fn export_file_name(now: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_FILE_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn zero_pads_every_component() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(
            export_file_name(now, ExportFormat::Xlsx),
            "Remitos_20240307_090501.xlsx"
        );
        assert_eq!(
            export_file_name(now, ExportFormat::Csv),
            "Remitos_20240307_090501.csv"
        );
    }
}
