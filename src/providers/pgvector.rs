//! Postgres + pgvector store for the course corpus
//!
//! The corpus is ingested out-of-band into `langchain_pg_embedding`, whose
//! `cmetadata` jsonb column carries the source document name. This provider
//! only reads: cosine-ordered similarity search and the distinct-source
//! listing used to populate the course selector.

use async_trait::async_trait;
use pgvector::Vector;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::types::{Chunk, SourceFilter};

use super::vector_store::VectorStoreProvider;

/// Embedding table written by the ingestion pipeline
const TABLE_NAME: &str = "langchain_pg_embedding";

/// Vector store backed by Postgres/pgvector
pub struct PgVectorStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct ChunkRow {
    document: String,
    source: Option<String>,
}

impl ChunkRow {
    /// A row without a source name is malformed; retrieval is fatal for
    /// the request in that case.
    fn into_chunk(self) -> Result<Chunk> {
        let source = self
            .source
            .ok_or_else(|| Error::retrieval("chunk record is missing its source metadata"))?;
        Ok(Chunk::new(self.document, source))
    }
}

impl PgVectorStore {
    /// Connect to the database. Connection failure here is fatal at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await
            .map_err(|e| Error::Config(format!("failed to connect to Postgres: {}", e)))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VectorStoreProvider for PgVectorStore {
    async fn similarity_search(
        &self,
        query_embedding: &[f32],
        k: usize,
        filter: &SourceFilter,
    ) -> Result<Vec<Chunk>> {
        let embedding = Vector::from(query_embedding.to_vec());
        let limit = k as i64;

        let rows: Vec<ChunkRow> = match filter {
            SourceFilter::None => {
                sqlx::query_as(&format!(
                    "SELECT document, cmetadata->>'source' AS source \
                     FROM {TABLE_NAME} \
                     ORDER BY embedding <=> $1 ASC \
                     LIMIT $2"
                ))
                .bind(&embedding)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            SourceFilter::Equals(name) => {
                sqlx::query_as(&format!(
                    "SELECT document, cmetadata->>'source' AS source \
                     FROM {TABLE_NAME} \
                     WHERE cmetadata->>'source' = $2 \
                     ORDER BY embedding <=> $1 ASC \
                     LIMIT $3"
                ))
                .bind(&embedding)
                .bind(name)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            SourceFilter::In(names) => {
                sqlx::query_as(&format!(
                    "SELECT document, cmetadata->>'source' AS source \
                     FROM {TABLE_NAME} \
                     WHERE cmetadata->>'source' = ANY($2) \
                     ORDER BY embedding <=> $1 ASC \
                     LIMIT $3"
                ))
                .bind(&embedding)
                .bind(names)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(ChunkRow::into_chunk).collect()
    }

    async fn list_sources(&self) -> Result<Vec<String>> {
        let rows: Vec<(Option<String>,)> = sqlx::query_as(&format!(
            "SELECT DISTINCT cmetadata->>'source' AS source_name \
             FROM {TABLE_NAME} \
             WHERE cmetadata IS NOT NULL AND cmetadata ? 'source' \
             ORDER BY source_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(|(name,)| name).collect())
    }

    fn name(&self) -> &str {
        "pgvector"
    }
}
