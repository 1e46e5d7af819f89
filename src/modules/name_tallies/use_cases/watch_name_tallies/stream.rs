// Bridges the synchronous store subscription into an async stream.
//
// The first item is the list as it was when the watch opened, then one item per append.
// Items are queued without bound so no notification is dropped or merged. The store
// subscription is released when the watch is dropped.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::modules::name_tallies::core::record::NameTally;
use crate::modules::name_tallies::core::store::{NameTallyStore, NameTallyUnsubscriber};

pub struct NameTallyWatch {
    receiver: mpsc::UnboundedReceiver<Vec<NameTally>>,
    unsubscriber: Option<NameTallyUnsubscriber>,
}

impl NameTallyWatch {
    pub fn open(store: &NameTallyStore) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let unsubscriber = store.subscribe(move |records: &[NameTally]| {
            // The receiver only goes away together with the watch, which unsubscribes.
            let _ = sender.send(records.to_vec());
        });
        Self {
            receiver,
            unsubscriber: Some(unsubscriber),
        }
    }
}

impl Stream for NameTallyWatch {
    type Item = Vec<NameTally>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for NameTallyWatch {
    fn drop(&mut self) {
        if let Some(unsubscriber) = self.unsubscriber.take() {
            unsubscriber.unsubscribe();
            tracing::debug!("name tally watch closed");
        }
    }
}
