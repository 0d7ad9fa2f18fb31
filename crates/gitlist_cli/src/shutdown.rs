use console::Term;

/// Resolve once Ctrl+C is pressed.
///
/// An interrupted audit writes nothing; the caller drops the in-flight run
/// and exits with status 130.
pub(crate) async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }

    if Term::stderr().is_term() {
        eprintln!("\nInterrupted, no report written.");
    } else {
        tracing::warn!("Interrupted, no report written");
    }
}
