// quillsql-core/src/application/engine.rs

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::query::GeneratedQuery;
use crate::domain::result::QueryOutput;
use crate::error::QuillError;
use crate::ports::connector::Connector;

/// Run a generated statement with instrumentation (logs + timing).
/// No validation happens before the statement reaches the engine.
#[instrument(skip_all, fields(engine = connector.engine_name(), query.len = query.as_str().len()))]
pub async fn execute_query(
    connector: &dyn Connector,
    query: &GeneratedQuery,
) -> Result<QueryOutput, QuillError> {
    let start = Instant::now();
    debug!("Executing query: {}", query);

    let result = connector.query(query.as_str()).await;
    let duration = start.elapsed();

    match result {
        Ok(output) => {
            debug!(rows = output.rows.len(), "Query finished in {:.2?}", duration);
            Ok(output)
        }
        Err(e) => {
            // Logged here for the timing context; the caller still gets the error
            error!("Query failed after {:.2?}: {}", duration, e);
            Err(e)
        }
    }
}
