use super::{order_table, read_names};
use namedraw_core::Result;
use std::path::Path;

/// Draw every name in one go and print the resulting order
pub async fn show_draw_order(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = read_names(file).await?;
    let flow = namedraw_core::draw_all(&raw)?;

    tracing::info!(
        "Flow {} drew {} names",
        flow.id(),
        flow.history().len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
        return Ok(());
    }

    println!("Draw order:");
    println!("{}", order_table(flow.history()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use namedraw_core::NamedrawError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_order_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("names.txt");
        std::fs::write(&path, "Kim\n\nLee\nPark\n").unwrap();

        show_draw_order(Some(&path), false).await.unwrap();
        show_draw_order(Some(&path), true).await.unwrap();
    }

    #[tokio::test]
    async fn test_order_rejects_short_list() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("names.txt");
        std::fs::write(&path, "OnlyOne\n").unwrap();

        let err = show_draw_order(Some(&path), true).await.unwrap_err();
        assert!(matches!(err, NamedrawError::Parse(_)));
    }

    #[tokio::test]
    async fn test_order_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = show_draw_order(Some(&path), false).await.unwrap_err();
        assert!(matches!(err, NamedrawError::Io(_)));
    }
}
