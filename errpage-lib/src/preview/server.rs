use std::convert::Infallible;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::preview::{handle, PreviewState};
use crate::telemetry::EventRecorder;

/// Guard to decrement active connections counter when dropped
struct ConnectionGuard(Arc<AtomicUsize>);

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Serve preview pages on `listener` until `shutdown` resolves
///
/// After shutdown, in-flight connections get `state.shutdown_timeout` to finish.
pub async fn run<R, F>(listener: TcpListener, state: Arc<PreviewState<R>>, shutdown: F) -> Result<()>
where
    R: EventRecorder + 'static,
    F: Future<Output = ()>,
{
    let builder = ConnBuilder::new(TokioExecutor::new());
    let active_connections = Arc::new(AtomicUsize::new(0));
    tokio::pin!(shutdown);

    info!(addr = ?listener.local_addr()?, "starting error page preview server");

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, no longer accepting connections");
                break;
            }
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok((stream, peer)) => (stream, peer),
                    Err(e) => {
                        warn!(error = %e, "accept error");
                        continue;
                    }
                };

                active_connections.fetch_add(1, Ordering::Relaxed);
                let guard = ConnectionGuard(Arc::clone(&active_connections));
                let builder = builder.clone();
                let state = Arc::clone(&state);

                tokio::spawn(async move {
                    let _guard = guard;
                    let svc = service_fn(move |req: Request<Incoming>| {
                        let state = Arc::clone(&state);
                        async move {
                            let response = handle(&state, &req);
                            debug!(
                                method = %req.method(),
                                path = req.uri().path(),
                                status = response.status().as_u16(),
                                "preview request"
                            );
                            Ok::<_, Infallible>(response)
                        }
                    });

                    if let Err(e) = builder.serve_connection(TokioIo::new(stream), svc).await {
                        warn!(?peer, error = %e, "serve_connection error");
                    }
                });
            }
        }
    }

    let start = std::time::Instant::now();
    loop {
        let active = active_connections.load(Ordering::Relaxed);
        if active == 0 {
            info!("All connections closed, shutdown complete");
            break;
        }

        if start.elapsed() >= state.shutdown_timeout {
            warn!(
                active_connections = active,
                "Shutdown timeout reached, {} connections still active", active
            );
            break;
        }

        sleep(Duration::from_millis(100)).await;
    }

    info!("Preview server stopped");
    Ok(())
}
