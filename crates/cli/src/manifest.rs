//! Submission manifests.
//!
//! A manifest is a YAML file describing one submission set and its documents. Document content
//! paths are resolved relative to the manifest's directory.
//!
//! ```yaml
//! submission_set:
//!   unique_id: 1.2.3.4.5.6
//!   patient_id: 76cc765a442f410^^^&1.3.6.1.4.1.21367.2005.3.7&ISO
//!   content_type_code: { code: 34133-9, scheme: 2.16.840.1.113883.6.1 }
//! documents:
//!   - content: discharge.xml
//!     unique_id: 1.2.3.4.5.6.1
//!     ...
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xds_core::{
    DocumentMetadata, ProvideAndRegisterDocumentSetRequest, SubmissionBuilder,
    SubmissionSetMetadata, XdsConfig,
};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub submission_set: SubmissionSetMetadata,
    pub documents: Vec<ManifestDocument>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestDocument {
    pub content: PathBuf,
    #[serde(flatten)]
    pub metadata: DocumentMetadata,
}

/// A parsed manifest with every document's content read into memory.
#[derive(Debug)]
pub struct LoadedManifest {
    pub submission_set: SubmissionSetMetadata,
    pub documents: Vec<(DocumentMetadata, Vec<u8>)>,
}

impl LoadedManifest {
    /// Reads the manifest at `path` and the content files it names.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let manifest: Manifest = serde_yaml::from_str(&text)
            .with_context(|| format!("invalid manifest {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut documents = Vec::with_capacity(manifest.documents.len());
        for document in manifest.documents {
            let content_path = base.join(&document.content);
            let content = std::fs::read(&content_path).with_context(|| {
                format!("failed to read document content {}", content_path.display())
            })?;
            tracing::debug!("loaded {} ({} bytes)", content_path.display(), content.len());
            documents.push((document.metadata, content));
        }

        Ok(Self {
            submission_set: manifest.submission_set,
            documents,
        })
    }

    /// Builds the provide-and-register request, borrowing the loaded content.
    pub fn build<'a>(
        &'a self,
        config: &'a XdsConfig,
    ) -> anyhow::Result<ProvideAndRegisterDocumentSetRequest<'a>> {
        let mut builder = SubmissionBuilder::new(config, self.submission_set.clone());
        for (metadata, content) in &self.documents {
            builder.add_document(metadata.clone(), content);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
submission_set:
  unique_id: "1.2.3.4.5.6"
  patient_id: "76cc765a442f410^^^&1.3.6.1.4.1.21367.2005.3.7&ISO"
  submission_time: 2024-03-01T09:30:00Z
  content_type_code: { code: 34133-9, scheme: 2.16.840.1.113883.6.1 }
documents:
  - content: discharge.xml
    unique_id: "1.2.3.4.5.6.1"
    patient_id: "76cc765a442f410^^^&1.3.6.1.4.1.21367.2005.3.7&ISO"
    mime_type: text/xml
    title: Discharge summary
    creation_time: 2024-02-28T17:05:09Z
    class_code: { code: DS, scheme: 1.3.6.1.4.1.21367.100.1 }
    type_code: { code: 18842-5, scheme: 2.16.840.1.113883.6.1 }
    format_code: { code: "urn:ihe:pcc:xphr:2007", scheme: 1.3.6.1.4.1.19376.1.2.3 }
    practice_setting_code:
      code: General Medicine
      scheme: Connect-a-thon practiceSettingCodes
    confidentiality_code:
      code: 1.3.6.1.4.1.21367.2006.7.107
      scheme: Connect-a-thon confidentialityCodes
"#;

    #[test]
    fn test_load_and_build_manifest() {
        let dir = TempDir::new().expect("tempdir");
        let manifest_path = dir.path().join("submission.yaml");
        fs::write(&manifest_path, MANIFEST).expect("write manifest");
        fs::write(dir.path().join("discharge.xml"), "<ClinicalDocument/>").expect("write doc");

        let loaded = LoadedManifest::load(&manifest_path).expect("load manifest");
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].1, b"<ClinicalDocument/>");

        let config = XdsConfig::new("1.3.6.1.4.1.21367.2005.3.7", None).expect("valid config");
        let request = loaded.build(&config).expect("valid submission");
        assert_eq!(request.documents.len(), 1);
        assert_eq!(request.submit_objects_request.registry_object_list.len(), 4);
    }

    #[test]
    fn test_load_reports_missing_content() {
        let dir = TempDir::new().expect("tempdir");
        let manifest_path = dir.path().join("submission.yaml");
        fs::write(&manifest_path, MANIFEST).expect("write manifest");

        let err = LoadedManifest::load(&manifest_path).expect_err("content file missing");
        assert!(err.to_string().contains("discharge.xml"));
    }
}
