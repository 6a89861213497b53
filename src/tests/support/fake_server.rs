use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Local HTTP server standing in for the portfolio backend or the mail relay.
///
/// Bound to an ephemeral port; shut down when dropped.
pub struct FakeServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FakeServer {
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake server");
        let addr = listener.local_addr().expect("Fake server has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake server stopped unexpectedly");
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// A base URL nothing is listening on.
    pub async fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("Probe listener has no address");
        drop(listener);
        format!("http://{}", addr)
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
