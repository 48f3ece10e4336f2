use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::export;
use crate::llm::ContractorSource;
use crate::models::ContractorQuery;
use crate::ui::Output;

/// Look up contractors for `query` and export them as CSV into `output_dir`.
///
/// The file is only touched once the lookup has succeeded.
pub async fn find(
    source: &dyn ContractorSource,
    query: &ContractorQuery,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output = Output::new();

    output.status(
        "Searching",
        &format!("{} contractors in {}", query.project_type, query.county),
    );

    let list = source.find_contractors(query).await.with_context(|| {
        format!(
            "Failed to find {} contractors in {}",
            query.project_type, query.county
        )
    })?;

    let path = export::output_path(output_dir, query);
    if path.exists() {
        output.warning(&format!("Overwriting existing export {}", path.display()));
    }

    output.status(
        "Writing",
        &format!("{} contractors to {}", list.contractors.len(), path.display()),
    );
    export::write_csv(&path, query, &list)?;

    if list.contractors.is_empty() {
        output.note("No contractors returned, wrote header row only");
    }
    output.finish(&format!("export for {} ({})", query.county, query.project_type));

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contractor, ContractorList, ProjectSpecialization};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedSource {
        list: ContractorList,
        seen: Mutex<Vec<ContractorQuery>>,
    }

    #[async_trait]
    impl ContractorSource for FixedSource {
        async fn find_contractors(&self, query: &ContractorQuery) -> Result<ContractorList> {
            self.seen.lock().unwrap().push(query.clone());
            Ok(self.list.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ContractorSource for FailingSource {
        async fn find_contractors(&self, _query: &ContractorQuery) -> Result<ContractorList> {
            anyhow::bail!("LLM API error (401 Unauthorized): invalid api key")
        }
    }

    fn greenhouse_builder() -> Contractor {
        Contractor {
            name: "Cedar Park Greenhouses".to_string(),
            website: Some("https://cedarparkgreenhouses.example".to_string()),
            phone: None,
            email: None,
            city: Some("Cedar Park".to_string()),
            state: Some("TX".to_string()),
            specialization: Some(vec![ProjectSpecialization::Greenhouses]),
        }
    }

    #[tokio::test]
    async fn test_find_writes_export() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixedSource {
            list: ContractorList {
                contractors: vec![greenhouse_builder()],
            },
            seen: Mutex::new(Vec::new()),
        };
        let query = ContractorQuery::new("Williamson County, TX", ProjectSpecialization::Greenhouses);

        let path = find(&source, &query, dir.path()).await.unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("contractors_Williamson County_TX_greenhouses.csv")
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "County,State,Company,Phone,Email,Website,Specialization\r\n\
             \"Williamson County, TX\",TX,Cedar Park Greenhouses,,,https://cedarparkgreenhouses.example,greenhouses\r\n"
        );
        assert_eq!(source.seen.lock().unwrap().as_slice(), &[query]);
    }

    #[tokio::test]
    async fn test_find_empty_result_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixedSource {
            list: ContractorList::default(),
            seen: Mutex::new(Vec::new()),
        };
        let query = ContractorQuery::new("Loving County, TX", ProjectSpecialization::General);

        let path = find(&source, &query, dir.path()).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "County,State,Company,Phone,Email,Website,Specialization\r\n");
    }

    #[tokio::test]
    async fn test_find_failure_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let query = ContractorQuery::new("Travis County, TX", ProjectSpecialization::Decks);

        let err = find(&FailingSource, &query, dir.path()).await.unwrap_err();

        assert!(format!("{:#}", err).contains("401 Unauthorized"));
        assert!(!export::output_path(dir.path(), &query).exists());
    }

    #[tokio::test]
    async fn test_find_failure_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let query = ContractorQuery::new("Travis County, TX", ProjectSpecialization::Fencing);
        let path = export::output_path(dir.path(), &query);
        std::fs::write(&path, "previous run\r\n").unwrap();

        assert!(find(&FailingSource, &query, dir.path()).await.is_err());

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\r\n");
    }
}
