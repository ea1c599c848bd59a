pub mod controller;
pub mod events;
pub mod runtime;
mod timer_slot;

#[cfg(test)]
pub(crate) mod test_support;
