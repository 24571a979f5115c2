use tokio::runtime::Runtime;

/// Creates a lightweight single-threaded Tokio runtime
///
/// Uses current_thread scheduler: every click gets its own short-lived thread,
/// so a multi-threaded runtime per request would spawn N workers for nothing.
pub fn create_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_runs_a_future() {
        let rt = create_runtime().unwrap();
        assert_eq!(rt.block_on(async { 21 * 2 }), 42);
    }
}
