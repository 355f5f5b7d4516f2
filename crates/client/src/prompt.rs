//! Free-form prompts and alerts.

use async_trait::async_trait;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin,
    Stdout,
};

/// Asks the user for one line of input, or tells them something.
#[async_trait]
pub trait Prompter: Send {
    /// `None` when the user gave no answer at all (end of input).
    async fn prompt(&mut self, message: &str) -> Option<String>;
    async fn alert(&mut self, message: &str);
}

/// Line-oriented terminal over any async reader/writer pair.
pub struct Terminal<R, W> {
    lines: Lines<R>,
    out: W,
}

impl Terminal<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    /// Next input line; `None` at end of input. Cancel safe.
    pub async fn next_line(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("failed to read input: {e}");
                None
            }
        }
    }

    pub async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[async_trait]
impl<R, W> Prompter for Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt(&mut self, message: &str) -> Option<String> {
        if let Err(e) = self.write(&format!("{message} ")).await {
            tracing::warn!("failed to write prompt: {e}");
        }
        self.next_line().await
    }

    async fn alert(&mut self, message: &str) {
        if let Err(e) = self.write(&format!("{message}\n")).await {
            tracing::warn!("failed to write alert: {e}");
        }
    }
}
