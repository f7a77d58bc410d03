use cartwise::config::Config;
use cartwise::speech::{ConsoleSpeaker, Heard, SaySpeaker, Speaker, StdinTranscriber, Transcriber};
use cartwise::Session;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!("cartwise booting; history at {}", config.history_path.display());

    let mut session = Session::open(&config.history_path);
    let mut speaker: Box<dyn Speaker + Send> = if config.voice {
        Box::new(SaySpeaker::new())
    } else {
        Box::new(ConsoleSpeaker)
    };

    // Transcription runs on a blocking task. Each heard command crosses the
    // channel; the channel closing means the input stream ended.
    let (tx, mut rx) = mpsc::channel::<String>(16);
    let language = config.language.clone();
    tokio::task::spawn_blocking(move || {
        let mut mic = StdinTranscriber;
        loop {
            match mic.listen(&language) {
                Heard::Command(command) => {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                Heard::Silence => continue,
                Heard::Closed => break,
            }
        }
    });

    println!("Voice Command Shopping Assistant");
    println!("Try: 'add milk', 'remove apples', 'show my list', 'suggest items', 'find apples under 5'");

    while let Some(command) = rx.recv().await {
        let turn = session.process(&command);
        speaker.speak(&turn.reply);
        render_list(&session);
        if !turn.should_continue {
            break;
        }
    }

    tracing::info!("cartwise shutting down");
    Ok(())
}

fn render_list(session: &Session) {
    let entries = session.list().entries();
    if entries.is_empty() {
        println!("Shopping list is empty.");
        return;
    }
    println!("Current shopping list:");
    for entry in entries {
        println!("- {} x {} ({})", entry.qty, entry.item, entry.category);
    }
}
