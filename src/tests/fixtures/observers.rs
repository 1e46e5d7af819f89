use crate::modules::name_tallies::core::record::NameTally;
use std::sync::{Arc, Mutex};

pub type Notifications = Arc<Mutex<Vec<Vec<NameTally>>>>;

/// Observer that keeps a copy of every list it is handed.
pub fn recording_observer() -> (Notifications, impl FnMut(&[NameTally]) + Send + 'static) {
    let notifications: Notifications = Arc::new(Mutex::new(Vec::new()));
    let sink = notifications.clone();
    let observer = move |records: &[NameTally]| sink.lock().unwrap().push(records.to_vec());
    (notifications, observer)
}
