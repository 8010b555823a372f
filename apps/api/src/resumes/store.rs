//! In-memory resume table. No persistence, eviction, or tenancy: a restart forgets everything.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::ResumeAnalysis;
use crate::models::resume::{ResumeRecord, ResumeStatus};

/// Cheap-to-clone handle over the shared resume table.
#[derive(Clone, Default)]
pub struct ResumeStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeRecord>>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: ResumeRecord) {
        self.inner.write().await.insert(record.resume_id, record);
    }

    pub async fn get(&self, id: Uuid) -> Option<ResumeRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    /// All records, oldest upload first.
    pub async fn list(&self) -> Vec<ResumeRecord> {
        let mut records: Vec<_> = self.inner.read().await.values().cloned().collect();
        records.sort_by_key(|r| (r.uploaded_at, r.resume_id));
        records
    }

    pub async fn remove(&self, id: Uuid) -> Option<ResumeRecord> {
        self.inner.write().await.remove(&id)
    }

    /// Replaces the analysis and extracted text wholesale and marks the record analyzed.
    /// Returns the updated record, or `None` if it was deleted in the meantime.
    pub async fn update_analysis(
        &self,
        id: Uuid,
        extracted_text: String,
        analysis: ResumeAnalysis,
    ) -> Option<ResumeRecord> {
        let mut table = self.inner.write().await;
        let record = table.get_mut(&id)?;
        record.extracted_text = extracted_text;
        record.summary = Some(analysis);
        record.status = ResumeStatus::Analyzed;
        Some(record.clone())
    }
}
