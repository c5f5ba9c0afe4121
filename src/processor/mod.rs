use crate::channel_consumer::ChannelConsumer;

pub mod print_monitor;
pub mod print_trajectories;

/// Something that observes completed runs (or any other values produced by a
/// search) one at a time.
///
/// # The default implementation of `ChannelConsumer` for `Processor`
///
/// Every `Processor` is also a [`ChannelConsumer`], so a processor can be
/// moved to another thread and fed over a `flume` channel:
///
/// ```
/// # use counting_ones::{channel_consumer::ChannelConsumer, processor::Processor};
/// #[derive(Default)]
/// struct Total(usize);
///
/// impl Processor<usize> for Total {
///     fn process(&mut self, value: &usize) {
///         self.0 += value;
///     }
/// }
///
/// let (sender, receiver) = flume::unbounded();
/// let handle = std::thread::spawn(move || {
///     let mut total = Total::default();
///     total.consume_all(receiver);
///     total.0
/// });
/// for value in 1..=4 {
///     sender.send(value).unwrap();
/// }
/// drop(sender);
/// assert_eq!(handle.join().unwrap(), 10);
/// ```
pub trait Processor<S> {
    fn process(&mut self, solution: &S);

    fn finalize_and_print(&self) {}
}

impl<S> Processor<S> for () {
    fn process(&mut self, _: &S) {}
}

impl<S, A, B> Processor<S> for (A, B)
where
    A: Processor<S>,
    B: Processor<S>,
{
    fn process(&mut self, solution: &S) {
        self.0.process(solution);
        self.1.process(solution);
    }

    fn finalize_and_print(&self) {
        self.0.finalize_and_print();
        self.1.finalize_and_print();
    }
}

impl<S, P> Processor<S> for Option<P>
where
    P: Processor<S>,
{
    fn process(&mut self, solution: &S) {
        if let Some(processor) = self {
            processor.process(solution);
        }
    }

    fn finalize_and_print(&self) {
        if let Some(processor) = self {
            processor.finalize_and_print();
        }
    }
}

/// Forward a copy of each value to whoever holds the matching receiver.
impl<S> Processor<S> for flume::Sender<S>
where
    S: Clone,
{
    fn process(&mut self, solution: &S) {
        if self.send(solution.clone()).is_err() {
            log::warn!("Receiver was dropped; discarding processed value");
        }
    }
}

impl<S, P> ChannelConsumer<S> for P
where
    P: Processor<S>,
{
    fn consume_all(&mut self, receiver: flume::Receiver<S>) {
        while let Ok(solution) = receiver.recv() {
            self.process(&solution);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect(Vec<i32>);

    impl Processor<i32> for Collect {
        fn process(&mut self, solution: &i32) {
            self.0.push(*solution);
        }
    }

    #[test]
    fn pairs_process_with_both() {
        let mut pair = (Collect::default(), Collect::default());
        pair.process(&3);
        pair.process(&5);
        assert_eq!(pair.0 .0, vec![3, 5]);
        assert_eq!(pair.1 .0, vec![3, 5]);
    }

    #[test]
    fn missing_processors_are_skipped() {
        let mut processor: Option<Collect> = None;
        processor.process(&1);
        assert!(processor.is_none());
    }

    #[test]
    fn senders_forward_values() {
        let (mut sender, receiver) = flume::unbounded();
        sender.process(&7);
        drop(sender);

        let mut collect = Collect::default();
        collect.consume_all(receiver);
        assert_eq!(collect.0, vec![7]);
    }
}
