use udaipur_guide::{install_quiet_panic_hook, GuideConfig};
use udaipur_guide::mcp::run_server;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    
    
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("udaipur_guide=warn".parse()?)
                .add_directive("udaipur_guide::mcp=info".parse()?)
        )
        .init();
    install_quiet_panic_hook();

    run_server(GuideConfig::from_env()).await
}
