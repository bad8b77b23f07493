use super::{LoadError, LoadedSource};

/// Load source text from the system clipboard.
pub fn load() -> Result<LoadedSource, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(text)
}

fn from_text(text: String) -> Result<LoadedSource, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource("clipboard".to_string()));
    }

    tracing::info!(bytes = text.len(), "loaded clipboard text");
    Ok(LoadedSource {
        text,
        origin: "clipboard".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_clipboard_is_rejected() {
        let result = from_text(" \n ".to_string());
        assert!(matches!(result, Err(LoadError::EmptySource(_))));
    }

    #[test]
    fn test_clipboard_origin() {
        let source = from_text("0xFF ++ y".to_string()).unwrap();
        assert_eq!(source.origin, "clipboard");
        assert_eq!(source.text, "0xFF ++ y");
    }
}
