/// Consume all the values on a given channel, processing
/// them as appropriate.
///
/// The values on the channel are presumably produced by a search process,
/// typically completed runs from a [`Harness`](crate::harness::Harness).
/// The consumer processes these values in some way, such as printing
/// them to the console or collecting trajectories for plotting.
/// Implementations of the [`Processor`](crate::processor::Processor) trait are
/// how the values are processed, so you probably want to implement that
/// trait to provide the processing logic.
///
/// In most cases you can just use the default
/// implementation of `ChannelConsumer` for the [`Processor`](crate::processor::Processor) trait,
/// so you're not likely to need to implement this trait explicitly. See
/// [the `Processor` documentation](crate::processor::Processor#the-default-implementation-of-channelconsumer-for-processor)
/// for an example of how this works.
pub trait ChannelConsumer<S> {
    /// Consume all the values on the provided channel until every sender
    /// has been dropped.
    fn consume_all(&mut self, receiver: flume::Receiver<S>);
}
