use anyhow::Context;

use invtrack_cli::{Config, FileExportSink, Session, TerminalPrompt};
use invtrack_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    invtrack_observability::init();

    let config = Config::from_env().context("invalid configuration")?;

    tracing::info!(
        export_path = %config.export_path.display(),
        low_stock_threshold = %config.policy.low_stock_threshold,
        add_mode = ?config.policy.add_mode,
        "starting inventory tracker"
    );

    let mut session = Session::new(
        Inventory::with_policy(config.policy),
        TerminalPrompt::stdio(),
        std::io::stdout(),
        FileExportSink::new(config.export_path),
    );

    session.run().context("failed to write to the terminal")?;

    tracing::info!(items = session.inventory().len(), "inventory tracker exited");
    Ok(())
}
