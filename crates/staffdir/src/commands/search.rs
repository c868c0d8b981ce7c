//! Interactive search: one query per stdin line, debounced, filtered
//! against the live employee list.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use staffdir_core::{EmployeeStore, debounce_queries, filter_employees};

use crate::cli::{GlobalOpts, SearchArgs};
use crate::error::CliError;
use crate::output;

use super::employees::render_employees;

const QUERY_BUFFER: usize = 64;

pub async fn handle(
    store: &EmployeeStore,
    args: SearchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let employees = store.subscribe();
    let loaded = store.fetch_all().await?;
    output::print_status(
        &format!("{} employees loaded; type a query per line", loaded.len()),
        global,
    );

    let (tx, rx) = mpsc::channel::<String>(QUERY_BUFFER);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    let quiet = Duration::from_millis(args.debounce_ms);
    let mut queries = std::pin::pin!(debounce_queries(ReceiverStream::new(rx), quiet));

    while let Some(query) = queries.next().await {
        let matches = filter_employees(&employees.latest(), &query);
        tracing::debug!(query = %query, matches = matches.len(), "search applied");
        output::print_output(&render_employees(global, &matches)?, global.quiet);
    }
    Ok(())
}
