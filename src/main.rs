use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_processor::application::service::ReceiptService;
use receipt_processor::config::Config;
use receipt_processor::domain::ports::ReceiptStoreBox;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::{self, AppState};
use receipt_processor::logging;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.verbose);

    let addr = config.socket_addr().into_diagnostic()?;

    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let state = AppState::new(ReceiptService::new(store), config.strict_lookup);

    let listener = TcpListener::bind(addr).await.into_diagnostic()?;
    http::serve(listener, state).await.into_diagnostic()?;

    Ok(())
}
