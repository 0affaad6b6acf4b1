use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::domain::{CandidateId, CandidateRecord};

/// Storage abstraction owning ingested candidate records.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError>;
    /// Known records among `ids`, in identifier order; unknown ids are skipped.
    fn fetch_many(&self, ids: &[CandidateId]) -> Result<Vec<CandidateRecord>, RepositoryError>;
    fn all(&self) -> Result<Vec<CandidateRecord>, RepositoryError>;
    /// Removes every record, returning how many were dropped.
    fn clear(&self) -> Result<usize, RepositoryError>;
    fn len(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store keyed by candidate identifier.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    records: Mutex<BTreeMap<CandidateId, CandidateRecord>>,
}

impl InMemoryCandidateRepository {
    fn records(&self) -> Result<MutexGuard<'_, BTreeMap<CandidateId, CandidateRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("candidate store lock poisoned".to_string()))
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn fetch_many(&self, ids: &[CandidateId]) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard
            .values()
            .filter(|record| ids.contains(&record.id))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Ok(self.records()?.values().cloned().collect())
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut guard = self.records()?;
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records()?.len())
    }
}
