//! Line-oriented terminal input shared by the booking prompts and the
//! checkout presenter.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// A single buffered reader over stdin. Everything that prompts the user goes
/// through one instance so no input is buffered away from another reader.
#[derive(Clone)]
pub struct Console {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    pub async fn prompt(&self, label: &str) -> Result<Option<String>> {
        print!("{} ", label.bright_cyan());
        std::io::stdout().flush()?;
        let mut lines = self.lines.lock().await;
        Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
    }

    /// Yes/no question, defaulting to no.
    pub async fn confirm(&self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} [y/N]")).await?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes")))
    }
}
