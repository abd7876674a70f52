use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::{Completion, LookupRequest};
use crate::source::SuggestionSource;

/// Commands understood by the background lookup thread.
#[derive(Debug)]
pub enum LookupCommand {
	/// Resolve a suggestion query for the tagged generation.
	Resolve(LookupRequest),
	/// Stop the background thread.
	Shutdown,
}

/// Handle to the thread that resolves suggestion lookups.
///
/// Requests are processed in submission order. A request that is already
/// older than the latest submitted generation when the thread picks it up is
/// skipped without producing a [`Completion`].
pub struct LookupWorker {
	tx: Sender<LookupCommand>,
	rx: Receiver<Completion>,
	latest_generation: Arc<AtomicU64>,
	pending: Option<u64>,
}

impl LookupWorker {
	pub fn spawn<S>(source: Arc<S>) -> Self
	where
		S: SuggestionSource + ?Sized + 'static,
	{
		let (command_tx, command_rx) = mpsc::channel();
		let (completion_tx, completion_rx) = mpsc::channel();
		let latest_generation = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest_generation);

		let spawned = thread::Builder::new()
			.name("phoenician-lookup".into())
			.spawn(move || worker_loop(source.as_ref(), command_rx, completion_tx, thread_latest));
		if let Err(err) = spawned {
			log::error!("failed to spawn lookup worker: {err}");
		}

		Self {
			tx: command_tx,
			rx: completion_rx,
			latest_generation,
			pending: None,
		}
	}

	pub fn submit(&mut self, request: LookupRequest) {
		self.latest_generation
			.store(request.generation, Ordering::Release);
		self.pending = Some(request.generation);
		if self.tx.send(LookupCommand::Resolve(request)).is_err() {
			log::warn!("lookup worker is gone, suggestion request dropped");
			self.pending = None;
		}
	}

	pub fn try_recv(&mut self) -> Result<Completion, TryRecvError> {
		let completion = self.rx.try_recv()?;
		if self.pending == Some(completion.generation) {
			self.pending = None;
		}
		Ok(completion)
	}

	/// Generation of the most recent request that has not completed yet.
	#[must_use]
	pub fn pending_generation(&self) -> Option<u64> {
		self.pending
	}

	pub fn shutdown(&self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}
}

impl Drop for LookupWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}

fn worker_loop<S>(
	source: &S,
	command_rx: Receiver<LookupCommand>,
	completion_tx: Sender<Completion>,
	latest_generation: Arc<AtomicU64>,
) where
	S: SuggestionSource + ?Sized,
{
	while let Ok(command) = command_rx.recv() {
		let request = match command {
			LookupCommand::Resolve(request) => request,
			LookupCommand::Shutdown => break,
		};

		if request.generation < latest_generation.load(Ordering::Acquire) {
			log::trace!("skipping superseded lookup {}", request.generation);
			continue;
		}

		let outcome = source.resolve(&request.query);
		if completion_tx
			.send(Completion::new(request.generation, outcome))
			.is_err()
		{
			break;
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use super::*;
	use crate::lexicon::{LookupError, WordMatch};

	const TIMEOUT: Duration = Duration::from_secs(2);

	struct EchoSource;

	impl SuggestionSource for EchoSource {
		fn resolve(&self, query: &str) -> Result<Vec<WordMatch>, LookupError> {
			Ok(vec![WordMatch::new(query, 1)])
		}
	}

	/// Blocks inside `resolve` until the test releases it.
	struct GatedSource {
		started: Mutex<Sender<()>>,
		release: Mutex<Receiver<()>>,
		seen: Mutex<Vec<String>>,
	}

	impl SuggestionSource for GatedSource {
		fn resolve(&self, query: &str) -> Result<Vec<WordMatch>, LookupError> {
			self.seen.lock().unwrap().push(query.to_string());
			self.started.lock().unwrap().send(()).unwrap();
			self.release.lock().unwrap().recv_timeout(TIMEOUT).unwrap();
			Ok(Vec::new())
		}
	}

	fn recv(worker: &mut LookupWorker) -> Completion {
		let deadline = std::time::Instant::now() + TIMEOUT;
		loop {
			match worker.try_recv() {
				Ok(completion) => return completion,
				Err(TryRecvError::Empty) if std::time::Instant::now() < deadline => {
					thread::sleep(Duration::from_millis(5));
				}
				Err(err) => panic!("no completion received: {err:?}"),
			}
		}
	}

	fn request(generation: u64, query: &str) -> LookupRequest {
		LookupRequest {
			generation,
			query: query.to_string(),
		}
	}

	#[test]
	fn completions_carry_their_generation() {
		let mut worker = LookupWorker::spawn(Arc::new(EchoSource));
		worker.submit(request(1, "oce"));
		assert_eq!(worker.pending_generation(), Some(1));

		let completion = recv(&mut worker);
		assert_eq!(completion.generation, 1);
		assert_eq!(completion.outcome.unwrap(), vec![WordMatch::new("oce", 1)]);
		assert_eq!(worker.pending_generation(), None);
	}

	#[test]
	fn queued_requests_superseded_before_start_are_skipped() {
		let (started_tx, started_rx) = mpsc::channel();
		let (release_tx, release_rx) = mpsc::channel();
		let source = Arc::new(GatedSource {
			started: Mutex::new(started_tx),
			release: Mutex::new(release_rx),
			seen: Mutex::new(Vec::new()),
		});
		let mut worker = LookupWorker::spawn(Arc::clone(&source));

		worker.submit(request(1, "oce"));
		started_rx.recv_timeout(TIMEOUT).unwrap();
		worker.submit(request(2, "ocea"));
		worker.submit(request(3, "ocean"));

		release_tx.send(()).unwrap();
		assert_eq!(recv(&mut worker).generation, 1);
		assert_eq!(worker.pending_generation(), Some(3));

		started_rx.recv_timeout(TIMEOUT).unwrap();
		release_tx.send(()).unwrap();
		assert_eq!(recv(&mut worker).generation, 3);

		assert_eq!(*source.seen.lock().unwrap(), vec!["oce", "ocean"]);
	}
}
