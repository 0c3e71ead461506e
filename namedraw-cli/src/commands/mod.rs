mod config;
mod order;
mod session;

pub use config::handle_config_command;
pub use order::show_draw_order;
pub use session::{run_session, SessionOptions};

use comfy_table::{presets::UTF8_FULL, Table};
use namedraw_core::{DrawRecord, Result, SelectionFlow};
use std::io::IsTerminal;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Names from `file`, or everything on stdin when no file is given
async fn read_names(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        tracing::debug!("Reading names from {}", path.display());
        return Ok(tokio::fs::read_to_string(path).await?);
    }

    if std::io::stdin().is_terminal() {
        eprintln!("Enter names, one per line. Finish with Ctrl-D.");
    }

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;
    Ok(raw)
}

fn remaining_table(flow: &SelectionFlow) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Still in the draw"]);

    for name in flow.remaining() {
        table.add_row(vec![name]);
    }

    table
}

/// Every entered name in entry order, with the round it was drawn in
fn summary_table(flow: &SelectionFlow) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "Drawn in round", "At"]);

    let all = flow.all().unwrap_or_default();
    for (slot, name) in all.iter().enumerate() {
        let record = flow.history().iter().find(|r| r.slot == slot);
        table.add_row(vec![
            (slot + 1).to_string(),
            name.clone(),
            record.map_or_else(|| "-".to_string(), |r| r.round.to_string()),
            record.map_or_else(|| "-".to_string(), format_time),
        ]);
    }

    table
}

/// Draws in the order they happened
fn order_table(history: &[DrawRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Round", "Name", "Entered as #"]);

    for record in history {
        table.add_row(vec![
            record.round.to_string(),
            record.name.clone(),
            (record.slot + 1).to_string(),
        ]);
    }

    table
}

fn format_time(record: &DrawRecord) -> String {
    record
        .drawn_at
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string()
}
