use std::time::Duration;

use turfbook_application::{prelude::sweep_expired_reservations, SlotLocks};
use turfbook_core::entities::time::Timestamp;
use turfbook_db_sqlite::Connections;

/// Periodically releases the slots of expired reservations.
pub async fn run(connections: Connections, slot_locks: SlotLocks, task_interval_time: Duration) {
    log::info!("Sweeping expired reservations every {task_interval_time:?}");
    let mut interval = tokio::time::interval(task_interval_time);
    loop {
        interval.tick().await;
        let connections = connections.clone();
        let slot_locks = slot_locks.clone();
        let swept = tokio::task::spawn_blocking(move || {
            sweep_expired_reservations(&connections, &slot_locks, Timestamp::now())
        })
        .await;
        match swept {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => {
                log::warn!("Expired reservations could not be swept: {err}");
            }
            Err(err) => {
                log::error!("Sweeper task failed: {err}");
            }
        }
    }
}
