//! Headless client loop
//!
//! Everything that touches the bus or the store runs on the task driving
//! [`run`]. The HTTP executor and the websocket reader are spawned tasks that
//! only talk back through channels.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::ClientConfig;
use crate::infrastructure::http::{run_outbound, HttpClient};
use crate::infrastructure::messaging::Dispatcher;
use crate::infrastructure::websocket::{ChannelStreamOpener, EventStreamClient, StreamHandler};
use crate::terminal::{self, Flow, TerminalCommand, HELP};
use crate::wiring::ClientCore;

/// Run until stdin closes or the user quits.
///
/// Must be polled on a current-thread runtime: the core is not `Send`.
pub async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let http = HttpClient::new(config.server_url.clone(), config.request_timeout)?;

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel();
    let (open_tx, mut open_rx) = mpsc::unbounded_channel();
    let (signal_tx, mut signal_rx) = mpsc::unbounded_channel();

    let outbound = tokio::spawn(run_outbound(
        Arc::new(http.clone()),
        request_rx,
        completion_tx,
    ));

    let core = ClientCore::wire(request_tx, Rc::new(ChannelStreamOpener::new(open_tx)));
    let handler = StreamHandler::new(core.bus.clone());
    let mut stream = EventStreamClient::new(
        config.events_url.clone(),
        config.server_url.clone(),
        http,
    );

    let last_summary = RefCell::new(String::new());
    let subscription = core.store.subscribe(move |values| {
        let summary = terminal::summary(values);
        if *last_summary.borrow() != summary {
            println!("{}", summary);
            last_summary.replace(summary);
        }
    });

    tracing::info!(server = %config.server_url, events = %config.events_url, "Client started");
    println!("{}", HELP);
    core.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(()) = open_rx.recv() => {
                tracing::info!(url = %config.events_url, "Opening event stream");
                stream.open(signal_tx.clone());
            }
            Some(report) = signal_rx.recv() => {
                if let Some(signal) = stream.accept(report) {
                    handler.handle(signal);
                }
            }
            Some(event) = completion_rx.recv() => core.bus.dispatch(event.into()),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if handle_line(&line, &core) == Flow::Quit {
                    break;
                }
            }
        }
    }

    subscription.unsubscribe();
    stream.shutdown();
    outbound.abort();
    tracing::info!("Client stopped");
    Ok(())
}

fn handle_line(line: &str, core: &ClientCore) -> Flow {
    if line.trim().is_empty() {
        return Flow::Continue;
    }
    let command = match line.parse::<TerminalCommand>() {
        Ok(command) => command,
        Err(e) => {
            println!("{} (type 'help')", e);
            return Flow::Continue;
        }
    };

    let values = core.store.values();
    match terminal::execute(command, &values, core.bus.as_ref()) {
        Ok(Flow::ShowHelp) => {
            println!("{}", HELP);
            Flow::Continue
        }
        Ok(flow) => flow,
        Err(refusal) => {
            println!("{}", refusal);
            Flow::Continue
        }
    }
}
