/// Outbound half of the transport collaborator.
///
/// `names[i]` is the module whose encoded payload is `payloads[i]`; both
/// slices always have the same length. Delivery is the transport's concern,
/// the caller does not wait on or observe the result.
pub trait ScenarioSender {
    fn send_batch(&mut self, names: &[String], payloads: &[Vec<u8>]);
}

impl<T: ScenarioSender + ?Sized> ScenarioSender for Box<T> {
    fn send_batch(&mut self, names: &[String], payloads: &[Vec<u8>]) {
        (**self).send_batch(names, payloads);
    }
}
