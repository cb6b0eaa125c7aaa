mod assignments;
mod domain_events;
pub(crate) mod propagation;
mod propagator_queue;
pub(crate) mod test_helper;
mod watch_list_cp;

pub use assignments::Assignments;
pub use assignments::EmptyDomain;
pub use assignments::Snapshot;
pub use domain_events::DomainEvent;
pub(crate) use domain_events::DomainEvents;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use watch_list_cp::WatchListCP;
pub use watch_list_cp::Watchers;
