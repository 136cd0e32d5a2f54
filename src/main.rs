use probekit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    tracing::info!("probekit {} ({})", probekit::VERSION, probekit::BUILD_DATE);

    // Launch GTK Application
    probekit_ui::gtk_app::main();

    Ok(())
}
