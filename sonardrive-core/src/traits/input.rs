//! Operator input trait

/// Start button
#[allow(async_fn_in_trait)]
pub trait InputGateway {
    /// Block until the operator signals start
    ///
    /// There is no timeout: an operator who never presses the button keeps
    /// the rover waiting forever. Called once per session.
    async fn wait_for_start(&mut self);
}

/// Shutdown request raced against the start wait
///
/// Only consulted while waiting for start; a running session is never
/// interrupted.
#[allow(async_fn_in_trait)]
pub trait ShutdownSignal {
    /// Resolve when the session loop should stop
    async fn wait(&mut self);
}

/// Shutdown token that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverShutdown;

impl ShutdownSignal for NeverShutdown {
    async fn wait(&mut self) {
        core::future::pending::<()>().await
    }
}
