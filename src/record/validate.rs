use regex::Regex;
use url::Url;

use super::types::MetaRecord;
use crate::error::{CatalogError, Result};

/// Shape check for maintainer emails: local part, one `@`, dotted domain.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Parses raw YAML bytes into a validated record.
///
/// Undecodable YAML fails with [`CatalogError::UnparsableRecord`]; a record
/// that decodes but breaks any field rule fails with
/// [`CatalogError::InvalidRecord`] listing every offending field. Missing
/// keys decode to empty values, so they surface as invalid fields rather
/// than parse failures.
pub fn parse_record(raw: &[u8]) -> Result<MetaRecord> {
    let record: MetaRecord =
        serde_yaml::from_slice(raw).map_err(|e| CatalogError::UnparsableRecord(e.to_string()))?;

    let fields = invalid_fields(&record);
    if !fields.is_empty() {
        return Err(CatalogError::InvalidRecord { fields });
    }
    Ok(record)
}

/// Collects the names of every field violating the record schema.
///
/// Scalar rule: non-blank. Website and source must additionally parse as
/// absolute URLs; maintainer emails must look like addresses. Maintainer
/// entries are reported with their position (`maintainers[0].email`).
fn invalid_fields(record: &MetaRecord) -> Vec<String> {
    let email_re = Regex::new(EMAIL_PATTERN).unwrap();
    let mut fields = Vec::new();

    if record.title.trim().is_empty() {
        fields.push("title".to_string());
    }
    if record.version.trim().is_empty() {
        fields.push("version".to_string());
    }
    if record.maintainers.is_empty() {
        fields.push("maintainers".to_string());
    }
    for (i, maintainer) in record.maintainers.iter().enumerate() {
        if maintainer.name.trim().is_empty() {
            fields.push(format!("maintainers[{i}].name"));
        }
        if !email_re.is_match(maintainer.email.trim()) {
            fields.push(format!("maintainers[{i}].email"));
        }
    }
    if record.company.trim().is_empty() {
        fields.push("company".to_string());
    }
    if !is_url(&record.website) {
        fields.push("website".to_string());
    }
    if !is_url(&record.source) {
        fields.push("source".to_string());
    }
    if record.license.trim().is_empty() {
        fields.push("license".to_string());
    }
    if record.description.trim().is_empty() {
        fields.push("description".to_string());
    }

    fields
}

fn is_url(value: &str) -> bool {
    !value.trim().is_empty() && Url::parse(value.trim()).is_ok()
}
