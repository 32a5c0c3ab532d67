//! Example job: build a tiny people relation and keep those over 30.
//!
//! Serves as the template for new jobs. It ignores its arguments.

use std::sync::Arc;

use async_trait::async_trait;
use datafusion::arrow::array::{ArrayRef, Int32Array, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::prelude::{col, lit, DataFrame};
use jobkit_session::Session;

use crate::error::JobError;
use crate::job::{Job, JobContext};
use crate::render::show;

/// Rows with `age` strictly greater than this survive the filter.
pub const AGE_THRESHOLD: i32 = 30;

pub struct WordJob;

impl WordJob {
    pub const NAME: &'static str = "word";

    /// The fixed `(name, age, country)` relation, ordered by age.
    pub fn people(session: &Session) -> Result<DataFrame, JobError> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("age", DataType::Int32, false),
            Field::new("country", DataType::Utf8, false),
        ]));

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["João", "Maria", "Pedro"])) as ArrayRef,
                Arc::new(Int32Array::from(vec![25, 31, 42])) as ArrayRef,
                Arc::new(StringArray::from(vec!["Brazil", "Portugal", "Spain"])) as ArrayRef,
            ],
        )?;

        Ok(session.context().read_batch(batch)?)
    }

    /// Keep rows with `age > threshold`, ordered by age.
    ///
    /// The sort pins row order: the engine may repartition the filter
    /// across threads.
    pub fn older_than(df: DataFrame, threshold: i32) -> Result<DataFrame, JobError> {
        Ok(df
            .filter(col("age").gt(lit(threshold)))?
            .sort(vec![col("age").sort(true, false)])?)
    }
}

#[async_trait]
impl Job for WordJob {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, ctx: JobContext<'_>) -> Result<(), JobError> {
        tracing::info!("start {} job...", Self::NAME);

        let people = Self::people(ctx.session)?;
        show("people", people.clone()).await?;

        let filtered = Self::older_than(people, AGE_THRESHOLD)?;
        show("filtered", filtered).await?;

        tracing::info!("Job {} done.", Self::NAME);
        Ok(())
    }
}
