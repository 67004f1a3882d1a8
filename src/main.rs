use ldframe::{configure_polars_display, write_preview, LdFrame, LdFrameError, QueryConfig};
use ldframe::DEFAULT_PREVIEW_ROWS;
use std::io;

#[tokio::main]
async fn main() -> Result<(), LdFrameError> {
    // Set RUST_LOG=info (or debug) to follow the request
    env_logger::init();
    configure_polars_display();

    let client = LdFrame::new(QueryConfig::default())?;
    let table = client.fetch().await?;

    write_preview(&mut io::stdout().lock(), &table, DEFAULT_PREVIEW_ROWS)?;
    Ok(())
}
