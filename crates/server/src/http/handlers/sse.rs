use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::state::AppState;

pub async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.console.subscribe();
    tracing::info!("SSE Connected: console events");

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(
            Event::default()
                .event(event.name())
                .json_data(&event)
                .map_err(|e| {
                    tracing::error!("SSE serialization error: {}", e);
                    axum::Error::new(e)
                }),
        ),
        Err(_lagged) => {
            tracing::warn!("SSE client lagged behind console events");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(std::time::Duration::from_secs(15)))
}
