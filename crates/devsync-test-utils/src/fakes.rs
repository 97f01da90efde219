//! Scripted stand-ins for the core's injected capabilities.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::Duration;

use devsync_core::ProcessOutput;
use devsync_core::ProcessRunner;
use devsync_core::discovery::{NameResolver, Prober};

enum Response {
    Output(ProcessOutput),
    Missing,
    TimedOut,
}

/// A [`ProcessRunner`] that replays queued responses in order.
///
/// Once the queue is drained every further call succeeds with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Response>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
    timeouts: RefCell<Vec<Option<Duration>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call.
    pub fn respond(self, output: ProcessOutput) -> Self {
        self.responses.borrow_mut().push_back(Response::Output(output));
        self
    }

    /// Queue a call that fails as if the program were not installed.
    pub fn missing_program(self) -> Self {
        self.responses.borrow_mut().push_back(Response::Missing);
        self
    }

    /// Queue a call that fails as if its time bound expired.
    pub fn time_out(self) -> Self {
        self.responses.borrow_mut().push_back(Response::TimedOut);
        self
    }

    /// The time bound of each call so far, `None` for unbounded calls.
    pub fn timeouts(&self) -> Vec<Option<Duration>> {
        self.timeouts.borrow().clone()
    }

    /// Every `(program, args)` pair seen so far.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl ScriptedRunner {
    fn next(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> io::Result<ProcessOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        self.timeouts.borrow_mut().push(timeout);

        match self.responses.borrow_mut().pop_front() {
            Some(Response::Output(output)) => Ok(output),
            Some(Response::Missing) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: not found"),
            )),
            Some(Response::TimedOut) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("{program}: timed out"),
            )),
            None => Ok(ProcessOutput::default()),
        }
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        self.next(program, args, None)
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> io::Result<ProcessOutput> {
        self.next(program, args, Some(timeout))
    }
}

/// A [`Prober`] with a fixed banner per host. Unknown hosts are silent.
#[derive(Default)]
pub struct FakeProber {
    banners: HashMap<String, String>,
    probed: RefCell<Vec<String>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_banner(mut self, host: &str, banner: &str) -> Self {
        self.banners.insert(host.to_string(), banner.to_string());
        self
    }

    /// Hosts probed, in call order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl Prober for FakeProber {
    fn probe(&self, host: &str) -> Option<String> {
        self.probed.borrow_mut().push(host.to_string());
        self.banners.get(host).cloned()
    }
}

/// A [`NameResolver`] backed by a fixed table.
#[derive(Default)]
pub struct FakeResolver {
    names: HashMap<String, String>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, host: &str, name: &str) -> Self {
        self.names.insert(host.to_string(), name.to_string());
        self
    }
}

impl NameResolver for FakeResolver {
    fn reverse(&self, host: &str) -> Option<String> {
        self.names.get(host).cloned()
    }
}
