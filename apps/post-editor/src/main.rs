//! # Post Editor
//!
//! Terminal front-end for one Darim post editing session.

mod command;
mod config;
mod render;
mod state;
mod telemetry;

use std::sync::Arc;

use darim_core::domain::PostId;
use darim_core::editor::{
    Candidates, DELETE_PROMPT, DeleteOutcome, EditorState, Field, PostEditor,
};
use darim_core::ports::PreviewRenderer;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::command::{Command, HELP};
use crate::config::EditorConfig;
use crate::state::AppState;
use crate::telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env();
    init_telemetry(&telemetry_config);

    let config = EditorConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let state = AppState::new(&config).await?;

    let editor = Arc::new(match config.post_id {
        Some(id) => PostEditor::open(state.posts.clone(), state.credential, PostId(id)).await?,
        None => PostEditor::new_post(state.posts.clone(), state.credential),
    });

    let watcher = spawn_status_watcher(&editor).await;

    println!("{}", render::frame(&editor.frame(state.preview.as_ref()).await));
    println!("{}", render::state(&editor.state().await));
    println!("type `help` for commands");

    let result = run(editor.clone(), state.preview.clone()).await;

    wait_for_saves(&editor).await;
    watcher.abort();

    tracing::info!("Editor closed");
    result
}

/// Print the status line whenever the session publishes a new state.
async fn spawn_status_watcher(editor: &PostEditor) -> tokio::task::JoinHandle<()> {
    let mut states = editor.subscribe().await;
    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            println!("{}", render::state(&state));
        }
    })
}

async fn run(editor: Arc<PostEditor>, preview: Arc<dyn PreviewRenderer>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Blur(field, value) => {
                save_in_background(&editor, Candidates::single(field, value)).await;
            }
            Command::Append(text) => {
                let mut content = editor.fields().await.content;
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(&text);
                save_in_background(&editor, Candidates::single(Field::Content, content)).await;
            }
            Command::Save => {
                let fields = editor.fields().await;
                save_in_background(&editor, Candidates::all(&fields)).await;
            }
            Command::Retry => {
                let editor = editor.clone();
                tokio::spawn(async move {
                    if let Err(e) = editor.retry().await {
                        println!("{e}");
                    }
                });
            }
            Command::Delete => {
                if delete(&editor, &mut lines).await? {
                    return Ok(());
                }
            }
            Command::View(mode) => {
                editor.set_view_mode(mode).await;
                println!("{}", render::frame(&editor.frame(preview.as_ref()).await));
            }
            Command::Toggle => {
                editor.toggle_view().await;
                println!("{}", render::frame(&editor.frame(preview.as_ref()).await));
            }
            Command::Show => {
                println!("{}", render::frame(&editor.frame(preview.as_ref()).await));
            }
            Command::Status => println!("{}", render::state(&editor.state().await)),
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(()),
        }
    }

    Ok(())
}

/// Commit candidates in input order; the persist call runs in the background.
async fn save_in_background(editor: &Arc<PostEditor>, candidates: Candidates) {
    let save = editor.spawn_save(candidates).await;
    tokio::spawn(async move {
        match save.await {
            Ok(report) => {
                if let Some(message) = render::report(&report) {
                    println!("{message}");
                }
            }
            Err(e) => tracing::error!(error = %e, "Save task failed"),
        }
    });
}

/// Ask for confirmation on the next input line. Returns true once the post is gone.
async fn delete(editor: &PostEditor, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<bool> {
    if editor.post_id().await.is_none() {
        println!("nothing to delete: the post was never saved");
        return Ok(false);
    }

    println!("{DELETE_PROMPT} [y/N]");
    let answer = lines.next_line().await?.is_some_and(|line| command::is_yes(&line));

    match editor.delete(&move |_: &str| answer).await? {
        DeleteOutcome::Deleted => {
            println!("post deleted");
            Ok(true)
        }
        DeleteOutcome::Aborted => Ok(false),
        DeleteOutcome::Failed => {
            println!("failed to delete the post");
            Ok(false)
        }
    }
}

/// Let in-flight saves settle before the process exits.
async fn wait_for_saves(editor: &PostEditor) {
    let mut states = editor.subscribe().await;
    if states.wait_for(save_settled).await.is_err() {
        tracing::warn!("Session dropped while a save was in flight");
    }
}

/// No save is left to wait for: nothing is in flight, or the post is gone.
fn save_settled(state: &EditorState) -> bool {
    state.closed || !state.status.is_ongoing()
}
