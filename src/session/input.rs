//! Line-oriented input feeding the session

use super::action::{ActionParseError, UserAction};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Parse lines from `reader` and forward actions until EOF, `quit` or a closed channel
pub async fn read_actions<R>(reader: R, tx: mpsc::Sender<UserAction>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let action = match line.parse::<UserAction>() {
            Ok(action) => action,
            Err(ActionParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if tx.send(action).await.is_err() {
            debug!("[INPUT] Session closed");
            break;
        }
        if action == UserAction::Quit {
            break;
        }
    }

    Ok(())
}

/// Spawn a task reading actions from stdin
pub fn spawn_stdin_reader(tx: mpsc::Sender<UserAction>) -> JoinHandle<Result<()>> {
    tokio::spawn(async move { read_actions(BufReader::new(tokio::io::stdin()), tx).await })
}
