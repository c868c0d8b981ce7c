// ── Query debouncing ──
//
// Coalesces raw keystroke queries so the filter runs once typing pauses.

use std::time::Duration;

use async_stream::stream;
use futures_core::Stream;
use futures_util::StreamExt;

/// Quiet interval after the last keystroke before a query is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce a stream of raw queries.
///
/// A query is emitted once `quiet` has elapsed with no newer input, and
/// only if it differs from the previously emitted query. When `input`
/// ends, a pending query is flushed under the same rule.
pub fn debounce_queries<S>(input: S, quiet: Duration) -> impl Stream<Item = String> + Send
where
    S: Stream<Item = String> + Send + Unpin,
{
    stream! {
        let mut input = input;
        let mut pending: Option<String> = None;
        let mut last: Option<String> = None;

        loop {
            let mut finished = false;

            let ready = match pending.take() {
                None => match input.next().await {
                    Some(query) => {
                        pending = Some(query);
                        None
                    }
                    None => break,
                },
                Some(query) => {
                    tokio::select! {
                        next = input.next() => match next {
                            Some(newer) => {
                                pending = Some(newer);
                                None
                            }
                            None => {
                                finished = true;
                                Some(query)
                            }
                        },
                        () = tokio::time::sleep(quiet) => Some(query),
                    }
                }
            };

            if let Some(query) = ready {
                if last.as_deref() != Some(query.as_str()) {
                    last = Some(query.clone());
                    yield query;
                }
            }

            if finished {
                break;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio_stream::wrappers::ReceiverStream;

    fn spawn_collector(rx: mpsc::Receiver<String>) -> tokio::task::JoinHandle<Vec<String>> {
        tokio::spawn(async move {
            debounce_queries(ReceiverStream::new(rx), SEARCH_DEBOUNCE)
                .collect::<Vec<_>>()
                .await
        })
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_emits_last_query_once() {
        let (tx, rx) = mpsc::channel(16);
        let collector = spawn_collector(rx);

        for query in ["j", "jo", "joh", "john"] {
            tx.send(query.to_owned()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(tx);

        assert_eq!(collector.await.unwrap(), vec!["john".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_query_is_suppressed() {
        let (tx, rx) = mpsc::channel(16);
        let collector = spawn_collector(rx);

        tx.send("ana".to_owned()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        tx.send("an".to_owned()).await.unwrap();
        tx.send("ana".to_owned()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        tx.send("bob".to_owned()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(tx);

        assert_eq!(
            collector.await.unwrap(),
            vec!["ana".to_owned(), "bob".to_owned()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn pending_query_flushes_when_input_ends() {
        let (tx, rx) = mpsc::channel(16);
        let collector = spawn_collector(rx);

        tx.send("dev".to_owned()).await.unwrap();
        drop(tx);

        assert_eq!(collector.await.unwrap(), vec!["dev".to_owned()]);
    }
}
