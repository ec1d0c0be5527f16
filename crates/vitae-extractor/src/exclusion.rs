//! Exclusion filter and shared context vocabulary
//!
//! A line matching any exclusion pattern is never scanned for degree tokens.
//! The veto is deliberately blunt: a credential token next to a job title, a
//! citation or a course listing is dropped even when it might be genuine.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Why a line was vetoed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionCategory {
    /// Job titles, appointments, open-ended date ranges
    Employment,
    /// Citations and publication markers
    Publication,
    /// Courses, training, workshops, certificates
    Course,
    /// Committees, boards, editorial service
    Committee,
    /// Advising, mentoring, student status
    Advising,
    /// Awards and prizes
    Award,
}

impl ExclusionCategory {
    /// Lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::Publication => "publication",
            Self::Course => "course",
            Self::Committee => "committee",
            Self::Advising => "advising",
            Self::Award => "award",
        }
    }
}

impl fmt::Display for ExclusionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct ExclusionPattern {
    regex: Regex,
    category: ExclusionCategory,
}

fn exclusion(regex_str: &str, category: ExclusionCategory) -> ExclusionPattern {
    ExclusionPattern {
        regex: Regex::new(regex_str).expect("Invalid exclusion regex pattern"),
        category,
    }
}

static EXCLUSION_PATTERNS: LazyLock<Vec<ExclusionPattern>> = LazyLock::new(|| {
    use ExclusionCategory::*;

    vec![
        exclusion(r"(?i)\bprofessor(?:ship)?s?\b", Employment),
        exclusion(r"(?i)\b(?:lecturer|director|chair(?:man|person)?|manager|consultant|instructor)s?\b", Employment),
        // "Dean" the title, not "Dean's List"
        exclusion(r"(?i)\bdeans?\b(?:[^'’]|$)", Employment),
        exclusion(r"(?i)\bresearch\s+(?:assistant|associate|fellow|scientist)\b", Employment),
        exclusion(r"(?i)\bpost-?doc(?:toral)?\b", Employment),
        exclusion(r"(?i)\b(?:19|20)\d{2}\s*[-–—]\s*(?:present|current|now)\b", Employment),
        exclusion(r"(?i)\b(?:journal|proceedings|forthcoming|published|press|review)\b", Publication),
        exclusion(r"(?i)\bworking\s+papers?\b", Publication),
        exclusion(r"(?i)\bvol\.\s*\d", Publication),
        exclusion(r"(?i)\bpp?\.\s*\d+\s*[-–]\s*\d+", Publication),
        exclusion(r"\b\d+\s*\(\d+\)\s*:\s*\d+", Publication),
        exclusion(r#"["“][^"“”]{10,}["”]"#, Publication),
        exclusion(r"(?i)\bet\s+al\b", Publication),
        exclusion(r"(?i)\band\b.+\band\b.+\band\b", Publication),
        exclusion(r"(?i)\b(?:courses?|taught|teaching|training|workshops?|seminars?|syllabus)\b", Course),
        exclusion(r"(?i)\bcertificat(?:e|es|ion)\b", Course),
        exclusion(r"(?i)\b(?:E?MBA|MS|MA|BA|BS)\s*-\s*[IVX]+\b", Course),
        exclusion(r"(?i)\b(?:committees?|boards?|editor(?:ial)?|reviewers?|served|members?|council)\b", Committee),
        exclusion(r"(?i)\btask\s+force\b", Committee),
        exclusion(r"(?i)\badvis(?:or|er|ee|ing)s?\b", Advising),
        exclusion(r"(?i)\bmentor(?:s|ing|ed)?\b", Advising),
        exclusion(r"(?i)\bsupervis\w*", Advising),
        exclusion(r"(?i)\b(?:students?|candidate)\b", Advising),
        exclusion(r"(?i)\b(?:award(?:s|ed)?|prizes?|recipient|winner|finalist|nominee|honorary)\b", Award),
    ]
});

/// The first category whose pattern matches the line, if any
pub fn exclusion_category(line: &str) -> Option<ExclusionCategory> {
    EXCLUSION_PATTERNS
        .iter()
        .find(|p| p.regex.is_match(line))
        .map(|p| p.category)
}

/// Whether the line is vetoed for credential extraction
pub fn is_excluded(line: &str) -> bool {
    exclusion_category(line).is_some()
}

/// Lines consisting only of a section heading: "EDUCATION", "II. Publications:"
static SECTION_HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[IVX]+\.|\d+\.)?\s*(?:education(?:al\s+background)?|academic\s+background|earned\s+degrees|degrees|(?:professional\s+|work\s+)?experience|employment(?:\s+history)?|(?:academic\s+)?positions|appointments|(?:selected\s+|refereed\s+)?publications|selected\s+papers|working\s+papers|research(?:\s+interests)?|teaching(?:\s+experience)?|awards(?:\s+and\s+honors)?|honors(?:\s+and\s+awards)?|grants|(?:professional\s+)?service|fellowships|references|skills|presentations|invited\s+talks)\s*[:.]?$",
    )
    .expect("Invalid exclusion regex pattern")
});

/// Capitalised heading words that open a section even with trailing text
static SECTION_HEADER_CAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[IVX]+\.\s*)?(?:EDUCATION|EXPERIENCE|EMPLOYMENT|PUBLICATIONS|RESEARCH|TEACHING|AWARDS|HONORS|GRANTS|SERVICE|POSITIONS|APPOINTMENTS|REFERENCES)\b",
    )
    .expect("Invalid exclusion regex pattern")
});

/// Whether the line is a section heading that context searches must not cross
pub fn is_section_boundary(line: &str) -> bool {
    let trimmed = line.trim();
    SECTION_HEADER_LINE.is_match(trimmed) || SECTION_HEADER_CAPS.is_match(trimmed)
}

/// Employment and appointment titles
pub(crate) static ROLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:professor|lecturer|director|dean|chair|manager|consultant|instructor|president|analyst|fellow|postdoc(?:toral)?)s?\b",
    )
    .expect("Invalid exclusion regex pattern")
});

/// Section vocabulary that never belongs inside an institution or name
pub(crate) static HEADER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:education|experience|employment|publications|positions|appointments|references|awards|curriculum|vitae|resume)\b",
    )
    .expect("Invalid exclusion regex pattern")
});

/// Course and training vocabulary
pub(crate) static COURSE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:courses?|training|workshops?|certificates?|certification|seminars?|syllabus|taught)\b")
        .expect("Invalid exclusion regex pattern")
});

/// Service vocabulary rejected in field-of-study text
pub(crate) static SERVICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:committee|board|council|editor|reviewer|member|admissions|employment)\b")
        .expect("Invalid exclusion regex pattern")
});
