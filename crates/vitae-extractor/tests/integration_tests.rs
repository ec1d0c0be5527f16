//! Integration tests for the Extractor public API

use proptest::prelude::*;
use vitae_domain::{DegreeLevel, EducationRecord, RecordParser};
use vitae_extractor::{
    exclusion_category, extract_institution, extract_year, field_after_token, is_section_boundary,
    is_valid_institution, parse_education, review_record, ExclusionCategory, Extractor, ExtractorConfig,
    ExtractorError,
};

/// Lines a generated CV is assembled from
const LINE_POOL: &[&str] = &[
    "John A. Smith",
    "Curriculum Vitae",
    "EDUCATION",
    "EMPLOYMENT",
    "PUBLICATIONS",
    "",
    "Ph.D., Finance, Stanford University, 2009",
    "Ph.D. in Economics, University of Chicago, 2004-2010",
    "D.Phil., University of Oxford",
    "MBA, INSEAD, 2004",
    "M.S. in Statistics, MIT, 2001",
    "M.A., Economics, Yale University, 1999",
    "Master of Science, Operations Research, Columbia University, 2003",
    "B.A., Harvard College, 1990",
    "B.S. in Computer Science, Carnegie Mellon University, 1998",
    "Bachelor of Arts, Princeton University",
    "B.A., M.A., Economics, Yale University, 2001",
    "1997",
    "University of Michigan",
    "Assistant Professor, MBA program, 2015",
    "Associate Professor of Marketing, 2010-present",
    "Journal of Finance 65(2): 1-30.",
    "Taught MBA core course, Fall 2012",
    "Member, PhD admissions committee",
    "Dean's List, 1996",
    "Phone: (555) 123-4567",
];

fn document_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(LINE_POOL), 0..30).prop_map(|lines| lines.join("\n"))
}

fn assert_record_invariants(record: &EducationRecord, config: &ExtractorConfig) {
    for level in DegreeLevel::ALL {
        assert!(record.count_level(level) <= config.cap_for(level));
    }
    for degree in &record.degrees {
        assert!(!degree.label.is_empty());
        assert!(!degree.institution.is_empty());
        if let Some(year) = degree.year {
            assert!(config.year_in_range(year), "year {} out of range", year);
        }
    }
    assert!(
        record.degrees.windows(2).all(|w| w[0].level <= w[1].level),
        "levels out of order"
    );
}

#[test]
fn test_realistic_document() {
    let text = "\
Maria Gonzalez
Associate Professor of Strategy
Kellogg School of Management, Northwestern University

EDUCATION
Ph.D. in Strategic Management, University of Michigan, 2004-2009
MBA, Harvard Business School, 2002
B.S., Industrial Engineering, Georgia Tech, 1998

ACADEMIC APPOINTMENTS
Assistant Professor of Strategy, Kellogg School of Management, 2009-2015
";
    let record = parse_education(text, "gonzalez.txt");

    assert_eq!(record.name, "Maria Gonzalez");
    assert_eq!(record.degrees.len(), 3);

    let phd = &record.degrees[0];
    assert_eq!(phd.level, DegreeLevel::Phd);
    assert_eq!(phd.institution, "University of Michigan");
    assert_eq!(phd.field, "Strategic Management");
    assert_eq!(phd.year, Some(2009));

    let mba = &record.degrees[1];
    assert_eq!(mba.label, "MBA");
    assert_eq!(mba.institution, "Harvard Business School");
    assert_eq!(mba.year, Some(2002));

    let bs = &record.degrees[2];
    assert_eq!(bs.institution, "Georgia Tech");
    assert_eq!(bs.field, "Industrial Engineering");

    assert!(record.notes.is_empty(), "unexpected notes: {:?}", record.notes);
    assert!(review_record(&record).is_empty());
}

#[test]
fn test_exclusion_categories() {
    assert_eq!(
        exclusion_category("Assistant Professor, MBA program"),
        Some(ExclusionCategory::Employment)
    );
    assert_eq!(exclusion_category("Taught MBA core course"), Some(ExclusionCategory::Course));
    assert_eq!(exclusion_category("Ph.D., Finance, Stanford University, 2009"), None);
    assert!(is_section_boundary("EDUCATION"));
    assert!(!is_section_boundary("School of Education, Stanford University"));
}

#[test]
fn test_component_extractors() {
    let config = ExtractorConfig::default();

    assert_eq!(extract_year("Ph.D., 2008-2012", &config), Some(2012));
    assert_eq!(extract_year("B.A., 1890", &config), None);

    assert_eq!(
        extract_institution("Ph.D., Economics, University of Chicago, 2010").as_deref(),
        Some("University of Chicago")
    );
    assert!(is_valid_institution("Stanford University"));
    assert!(!is_valid_institution("Department of Economics"));

    assert_eq!(field_after_token(" in Economics, Yale University").as_deref(), Some("Economics"));
}

#[test]
fn test_config_from_toml() {
    let config = ExtractorConfig::from_toml("institution_lookback = 3\nmax_masters = 1\n").unwrap();
    assert_eq!(config.institution_lookback, 3);
    assert_eq!(config.max_masters, 1);
    assert_eq!(config.max_phd, 1);

    let record = Extractor::new(config.clone())
        .unwrap()
        .parse("MBA, INSEAD, 2004\nM.S., MIT, 2001", "x.txt");
    assert_eq!(record.count_level(DegreeLevel::Masters), 1);
    assert_eq!(record.degrees[0].label, "M.S.");

    let parsed = ExtractorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_bad_config_rejected() {
    assert!(matches!(
        ExtractorConfig::from_toml("min_year = 2030\nmax_year = 2000\n"),
        Err(ExtractorError::Config(_))
    ));
    assert!(matches!(
        ExtractorConfig::from_toml("institution_lookback = \"many\""),
        Err(ExtractorError::Toml(_))
    ));
}

#[test]
fn test_parsers_are_interchangeable() {
    let parsers: Vec<Box<dyn RecordParser>> = vec![
        Box::new(Extractor::default()),
        Box::new(Extractor::new(ExtractorConfig::lenient()).unwrap()),
    ];
    for parser in &parsers {
        let record = parser.parse("Ph.D., Finance, MIT, 2010", "x.txt");
        assert_eq!(record.degrees.len(), 1);
        assert_eq!(record.source_label, "x.txt");
    }
}

proptest! {
    #[test]
    fn test_record_invariants(text in document_strategy()) {
        let config = ExtractorConfig::default();
        let record = Extractor::new(config.clone()).unwrap().parse(&text, "gen.txt");
        assert_record_invariants(&record, &config);
    }

    #[test]
    fn test_record_invariants_lenient(text in document_strategy()) {
        let config = ExtractorConfig::lenient();
        let record = Extractor::new(config.clone()).unwrap().parse(&text, "gen.txt");
        assert_record_invariants(&record, &config);
    }

    #[test]
    fn test_parse_is_deterministic(text in document_strategy()) {
        let extractor = Extractor::default();
        prop_assert_eq!(extractor.parse(&text, "a"), extractor.parse(&text, "a"));
    }

    #[test]
    fn test_arbitrary_text_never_panics(text in "\\PC{0,400}") {
        let record = parse_education(&text, "noise");
        assert_record_invariants(&record, &ExtractorConfig::default());
    }
}
