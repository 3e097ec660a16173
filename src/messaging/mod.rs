// Messaging - Forwarding sequencer notifications out of the stepping path

pub mod channels;
pub mod notification;

pub use channels::{
    NotificationConsumer, NotificationProducer, forwarding_observer, notification_channel,
};
pub use notification::EventNotification;
