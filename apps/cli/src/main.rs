use walletview_cli::config::Config;
use walletview_cli::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}
