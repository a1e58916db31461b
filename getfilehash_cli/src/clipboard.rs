//! System clipboard access
//!
//! Only the bare digest is ever placed on the clipboard, never the
//! surrounding metadata text.

use anyhow::{Context, Result};

/// Place a digest verbatim on the system clipboard
pub fn copy_digest(digest: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_text(digest.to_string())
        .context("Failed to copy the digest to the clipboard")?;
    Ok(())
}
