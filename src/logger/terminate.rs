//! Fatal-severity calls end the process. Routing that through a trait lets tests
//! observe the request without losing the test runner.

/// Receives the exit status a fatal call asks for.
pub trait Terminator: Send + Sync {
    fn terminate(&self, status: i32);
}

impl<F> Terminator for F
where
    F: Fn(i32) + Send + Sync,
{
    fn terminate(&self, status: i32) {
        self(status);
    }
}

/// Exits the process for real.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, status: i32) {
        std::process::exit(status);
    }
}
