//! WebSocket connection handling for the notifications hub.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::HeaderMap,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    data::{connection_id::ConnectionIdRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::bearer_token,
    state::AppState,
};

/// Query parameters for the hub handshake.
#[derive(Debug, Deserialize)]
pub struct HubConnectQuery {
    pub access_token: Option<String>,
}

/// Upgrades an authenticated client to a hub WebSocket connection.
///
/// Authentication accepts the bearer token from the `access_token` query
/// parameter in addition to the Authorization header; this accommodation
/// exists only on this endpoint because browser WebSocket clients cannot
/// attach custom headers during the handshake.
///
/// On success a fresh connection id is minted, stored in the database, and
/// registered with the hub before the upgrade completes, so pushes issued
/// immediately after the handshake are not lost.
///
/// # Returns
/// - `101 Switching Protocols` - Upgrade accepted
/// - `401 Unauthorized` - Missing, invalid, or expired token
pub async fn notifications_hub(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<HubConnectQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = hub_token(&headers, &query).ok_or(AuthError::MissingToken)?;
    let claims = state.tokens.decode(&token)?;

    let user_id: i32 = claims
        .sub
        .parse()
        .map_err(|_| AuthError::InvalidToken("subject is not a user id".to_string()))?;

    let Some(user) = UserRepository::new(&state.db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    let connection_id = Uuid::new_v4().to_string();
    let (tx, rx) = mpsc::unbounded_channel();

    ConnectionIdRepository::new(&state.db)
        .create(user.id, &connection_id)
        .await?;
    state.hub.register(connection_id.clone(), tx).await;

    tracing::info!(
        "User {} connected to notifications hub as {}",
        user.id,
        connection_id
    );

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id, rx)))
}

/// Resolves the bearer token for the hub handshake.
///
/// The query parameter takes precedence over the Authorization header when
/// both are present.
fn hub_token(headers: &HeaderMap, query: &HubConnectQuery) -> Option<String> {
    query
        .access_token
        .clone()
        .or_else(|| bearer_token(headers).map(str::to_string))
}

/// Forwards payloads from the connection's channel to the WebSocket sink.
///
/// Ends when the channel closes (connection unregistered) or the sink
/// rejects a send (peer gone).
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: AppState,
    connection_id: String,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();
    let push_task = pusher_loop(rx, sender);

    // The channel is push-only: inbound frames are drained and ignored until
    // the peer closes or the connection errors.
    while let Some(Ok(message)) = receiver.next().await {
        if let Message::Close(_) = message {
            break;
        }
    }

    push_task.abort();
    state.hub.unregister(&connection_id).await;

    if let Err(e) = ConnectionIdRepository::new(&state.db)
        .delete_by_connection_id(&connection_id)
        .await
    {
        tracing::error!(
            "Failed to remove connection record {}: {}",
            connection_id,
            e
        );
    }

    tracing::info!("Hub connection {} closed", connection_id);
}
