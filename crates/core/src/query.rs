//! Registry stored query helpers.
//!
//! Stored query parameter values use the ebXML query syntax: a single value is wrapped in single
//! quotes and a multi-valued parameter is a parenthesised, comma-separated list of quoted values.
//! Embedded single quotes are escaped by doubling them.

use crate::assembler::{new_adhoc_query_request, AdhocQueryRequest};
use crate::catalog::{
    REGISTRY_STORED_QUERY_FIND_DOCUMENTS, REGISTRY_STORED_QUERY_FIND_SUBMISSION_SETS,
    REGISTRY_STORED_QUERY_GET_ALL,
};
use crate::constants::{
    PARAM_DOCUMENT_ENTRY_PATIENT_ID, PARAM_DOCUMENT_ENTRY_STATUS, PARAM_FOLDER_STATUS,
    PARAM_PATIENT_ID, PARAM_SUBMISSION_SET_PATIENT_ID, PARAM_SUBMISSION_SET_STATUS,
    STATUS_APPROVED,
};
use crate::factory::new_slot;
use crate::XdsResult;
use xds_types::NonEmptyText;

/// Quotes a single stored query value: `abc` becomes `'abc'`.
pub fn quote_value(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quotes a multi-valued stored query parameter: `[a, b]` becomes `('a','b')`.
pub fn quote_list<S: AsRef<str>>(values: &[S]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote_value(v.as_ref())).collect();
    format!("({})", quoted.join(","))
}

fn statuses_or_approved<'a>(statuses: &'a [&'a str]) -> &'a [&'a str] {
    if statuses.is_empty() {
        &[STATUS_APPROVED]
    } else {
        statuses
    }
}

/// `FindDocuments` for a patient, limited to the given document entry statuses.
///
/// An empty status list means approved entries only.
pub fn find_documents_query(patient_id: &str, statuses: &[&str]) -> XdsResult<AdhocQueryRequest> {
    let patient_id = NonEmptyText::new(patient_id)?;
    Ok(new_adhoc_query_request(
        &REGISTRY_STORED_QUERY_FIND_DOCUMENTS,
        vec![
            new_slot(
                PARAM_DOCUMENT_ENTRY_PATIENT_ID,
                [quote_value(patient_id.as_str())],
            ),
            new_slot(
                PARAM_DOCUMENT_ENTRY_STATUS,
                [quote_list(statuses_or_approved(statuses))],
            ),
        ],
    ))
}

/// `FindSubmissionSets` for a patient, limited to the given submission set statuses.
pub fn find_submission_sets_query(
    patient_id: &str,
    statuses: &[&str],
) -> XdsResult<AdhocQueryRequest> {
    let patient_id = NonEmptyText::new(patient_id)?;
    Ok(new_adhoc_query_request(
        &REGISTRY_STORED_QUERY_FIND_SUBMISSION_SETS,
        vec![
            new_slot(
                PARAM_SUBMISSION_SET_PATIENT_ID,
                [quote_value(patient_id.as_str())],
            ),
            new_slot(
                PARAM_SUBMISSION_SET_STATUS,
                [quote_list(statuses_or_approved(statuses))],
            ),
        ],
    ))
}

/// `GetAll` for a patient: approved documents, submission sets and folders.
pub fn get_all_query(patient_id: &str) -> XdsResult<AdhocQueryRequest> {
    let patient_id = NonEmptyText::new(patient_id)?;
    let approved = quote_list(&[STATUS_APPROVED]);
    Ok(new_adhoc_query_request(
        &REGISTRY_STORED_QUERY_GET_ALL,
        vec![
            new_slot(PARAM_PATIENT_ID, [quote_value(patient_id.as_str())]),
            new_slot(PARAM_DOCUMENT_ENTRY_STATUS, [approved.clone()]),
            new_slot(PARAM_SUBMISSION_SET_STATUS, [approved.clone()]),
            new_slot(PARAM_FOLDER_STATUS, [approved]),
        ],
    ))
}
