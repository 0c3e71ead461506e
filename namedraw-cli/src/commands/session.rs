use super::{read_names, remaining_table, summary_table};
use dialoguer::{Editor, Select};
use namedraw_core::{FlowConfig, NamedrawError, RevealTimer, Result, SelectionFlow, StateTag};
use std::future::pending;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Names for the first start; later starts go through the editor
    pub file: Option<PathBuf>,
    pub flow: FlowConfig,
    pub manual_reveal: bool,
}

pub async fn run_session(options: SessionOptions) -> Result<()> {
    options.flow.validate()?;

    let timer = RevealTimer::from_config(&options.flow);
    let mut flow = SelectionFlow::new();
    let mut preset = match options.file.as_deref() {
        Some(path) => Some(read_names(Some(path)).await?),
        None => None,
    };
    let mut draft = String::new();

    tracing::debug!("Session started with flow {}", flow.id());

    loop {
        match flow.state_tag() {
            StateTag::Input => {
                let raw = match preset.take() {
                    Some(text) => text,
                    None => match prompt_names(&draft)? {
                        Some(text) => text,
                        None => {
                            println!("No names entered. Bye!");
                            return Ok(());
                        }
                    },
                };

                if flow.start(&raw).is_err() {
                    if let Some(notice) = flow.notice() {
                        println!("{}", notice);
                    }
                    draft = raw;
                } else {
                    draft.clear();
                }
            }

            StateTag::Selecting => {
                println!();
                println!("Who's next? {} left", flow.remaining_count());
                println!("{}", remaining_table(&flow));

                let choice = Select::new()
                    .with_prompt("Pick one")
                    .items(&["Draw!", "Start over", "Quit"])
                    .default(0)
                    .interact()?;

                match choice {
                    0 => {
                        flow.draw();
                    }
                    1 => flow.reset(),
                    _ => return Ok(()),
                }
            }

            StateTag::Revealing => {
                if let Some(winner) = flow.winner() {
                    print_winner(winner);
                }

                if options.manual_reveal {
                    let choice = Select::new()
                        .with_prompt("Next?")
                        .items(&["Continue", "Start over", "Quit"])
                        .default(0)
                        .interact()?;
                    if !apply_reveal_choice(&mut flow, choice) {
                        return Ok(());
                    }
                } else {
                    timer.run(&mut flow, pending()).await;
                }
            }

            StateTag::Done => {
                println!();
                println!("Everyone has been drawn!");
                println!("{}", summary_table(&flow));

                let choice = Select::new()
                    .with_prompt("What now?")
                    .items(&["Start over", "Quit"])
                    .default(0)
                    .interact()?;

                match choice {
                    0 => flow.reset(),
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Act on the manual reveal menu. Returns `false` when the user quits.
fn apply_reveal_choice(flow: &mut SelectionFlow, choice: usize) -> bool {
    match choice {
        0 => {
            flow.acknowledge_reveal();
            true
        }
        1 => {
            flow.reset();
            true
        }
        _ => false,
    }
}

/// Open the user's editor on `draft`. `None` means nothing was saved.
fn prompt_names(draft: &str) -> Result<Option<String>> {
    println!("Enter the participants, one name per line, then save and close the editor.");
    let text = Editor::new()
        .extension(".txt")
        .edit(draft)
        .map_err(|e| NamedrawError::dialog(e.to_string()))?;
    Ok(text)
}

fn print_winner(winner: &str) {
    println!();
    println!("═══════════════════════════════════");
    println!("  Congratulations, {}!", winner);
    println!("═══════════════════════════════════");
    println!();
}
