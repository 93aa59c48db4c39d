// Normalize Use Case - raw API payload to flat record

use crate::domain::{JobRecord, RawJobPayload};

const HIGHLIGHT_JOIN: &str = ", ";

/// Map one raw job payload into a flat JobRecord.
///
/// Pure and infallible: any missing or malformed field degrades to the empty
/// string, never an error. Highlight categories with no matching entry stay
/// empty; when multiple entries match the same category, the last one wins.
pub fn normalize(raw: &RawJobPayload) -> JobRecord {
    let mut record = JobRecord {
        job_id: raw.job_id.clone(),
        title: raw.title.clone(),
        location: raw.location.clone(),
        company_name: raw.company_name.clone(),
        description: raw.description.clone(),
        ..Default::default()
    };

    for highlight in &raw.job_highlights {
        let title = highlight.title.to_lowercase();
        let joined = highlight.items.join(HIGHLIGHT_JOIN);

        // First matching category per entry wins
        if title.contains("qualification") {
            record.qualifications = joined;
        } else if title.contains("benefits") {
            record.benefits = joined;
        } else if title.contains("responsibilities") {
            record.responsibilities = joined;
        }
    }

    record.posted_at = extension(raw, "posted_at");
    record.schedule_type = extension(raw, "schedule_type");
    record.dental_coverage = extension(raw, "dental_coverage");
    record.health_coverage = extension(raw, "health_coverage");

    record
}

/// Read one detected_extensions value as a string.
///
/// The live API mixes value types here (posting dates are strings, coverage
/// flags are booleans), so non-string scalars are stringified.
fn extension(raw: &RawJobPayload, key: &str) -> String {
    match raw.detected_extensions.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
