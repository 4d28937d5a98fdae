use jiff::civil::date;

use relata_core::error::CoreError;
use relata_core::filenames;
use relata_core::models::patient::{Gender, PatientRecord, TherapeuticApproach};
use relata_core::models::report_type::ReportType;
use relata_core::models::tone::Tone;

#[test]
fn report_type_ids_round_trip() {
    for report_type in ReportType::ALL {
        assert_eq!(ReportType::from_id(report_type.id()), Some(report_type));
    }
}

#[test]
fn unknown_report_type_id_is_rejected() {
    assert_eq!(ReportType::from_id("laudo_inexistente"), None);
    assert!("laudo_inexistente".parse::<ReportType>().is_err());
}

#[test]
fn catalog_sizes_match_the_product() {
    assert_eq!(ReportType::ALL.len(), 17);
    assert_eq!(Tone::ALL.len(), 3);
    assert_eq!(Gender::ALL.len(), 4);
    assert_eq!(TherapeuticApproach::ALL.len(), 10);
}

#[test]
fn report_filename_uses_id_and_compact_date() {
    let name = filenames::report_docx(ReportType::Devolutiva, date(2024, 1, 15));
    assert_eq!(name, "relatorio_devolutiva_20240115.docx");
}

#[test]
fn patient_age_is_bounded() {
    let record = PatientRecord::new(
        "Ana Souza",
        121,
        Gender::Feminino,
        date(2024, 3, 2),
        TherapeuticApproach::Psicanalise,
    );
    assert!(matches!(record, Err(CoreError::AgeOutOfRange(121))));

    let record = PatientRecord::new(
        "Ana Souza",
        120,
        Gender::Feminino,
        date(2024, 3, 2),
        TherapeuticApproach::Psicanalise,
    );
    assert!(record.is_ok());
}

#[test]
fn wire_identifiers_are_snake_case() {
    let json = serde_json::to_string(&ReportType::AvaliacaoInicial).unwrap();
    assert_eq!(json, "\"avaliacao_inicial\"");

    let parsed: Tone = serde_json::from_str("\"colaborativo_empatico\"").unwrap();
    assert_eq!(parsed, Tone::ColaborativoEmpatico);
}
