// Lock-free notification channel

use crate::messaging::notification::EventNotification;
use crate::sequencer::{Event, EventState};
use log::warn;
use ringbuf::traits::Producer;
use ringbuf::{HeapRb, traits::Split};

pub type NotificationProducer = ringbuf::HeapProd<EventNotification>;
pub type NotificationConsumer = ringbuf::HeapCons<EventNotification>;

pub fn notification_channel(capacity: usize) -> (NotificationProducer, NotificationConsumer) {
    let rb = HeapRb::<EventNotification>::new(capacity);
    rb.split()
}

/// Build an observer that pushes every Begin/End into `producer`
///
/// The observer never blocks: when the channel is full the notification is
/// dropped and a warning is logged.
pub fn forwarding_observer(
    mut producer: NotificationProducer,
) -> impl FnMut(&Event, EventState) {
    move |event: &Event, phase: EventState| {
        let notification = EventNotification::new(event, phase);
        if let Err(dropped) = producer.try_push(notification) {
            warn!(
                "Notification channel full, dropped {} '{}'",
                dropped.phase, dropped.name
            );
        }
    }
}
