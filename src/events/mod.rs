use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Domain events emitted by the services.
///
/// Events are fire-and-forget: a failed send is logged and never fails the
/// originating request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Station profile
    StationSaved(Uuid),

    // Tank events
    TankCreated(Uuid),
    TankUpdated(Uuid),
    TankDeleted(Uuid),

    // Pump events
    PumpCreated(Uuid),
    PumpUpdated(Uuid),
    PumpDeleted(Uuid),

    // Product events
    ProductCreated(Uuid),
    ProductUpdated(Uuid),
    ProductDeleted(Uuid),

    // Supplier events
    SupplierCreated(Uuid),
    SupplierUpdated(Uuid),
    SupplierDeleted(Uuid),

    // Employee events
    EmployeeCreated(Uuid),
    EmployeeUpdated(Uuid),
    EmployeeDeleted(Uuid),

    // Client events
    ClientCreated(Uuid),
    ClientUpdated(Uuid),
    ClientDeleted(Uuid),

    // Restock events
    RestockCreated(Uuid),
    RestockUpdated(Uuid),
    RestockDeleted(Uuid),

    // Sale events
    SaleCreated(Uuid),
    SaleUpdated(Uuid),
    SaleDeleted(Uuid),

    // Purchase events
    PurchaseCreated(Uuid),
    PurchaseUpdated(Uuid),
    PurchaseDeleted(Uuid),

    // Feedback events
    FeedbackCreated(Uuid),
}

/// Cloneable handle used by services to emit events.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event, logging on failure instead of propagating it.
    pub async fn send(&self, event: Event) {
        if let Err(e) = self.sender.send(event).await {
            warn!("Failed to send event: {}", e);
        }
    }
}

/// Consumes events from the channel and logs them.
///
/// Runs until all senders are dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        info!(?event, "Domain event");
    }
    info!("Event channel closed; event processor exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_event() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);

        let id = Uuid::new_v4();
        sender.send(Event::TankCreated(id)).await;

        match rx.recv().await {
            Some(Event::TankCreated(received)) => assert_eq!(received, id),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_on_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);
        sender.send(Event::SaleCreated(Uuid::new_v4())).await;
    }
}
