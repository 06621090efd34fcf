//! Veto-capable event contract.
//!
//! Some host events are handed to observers before they take effect. Any
//! observer may deny the event; the producer checks [`Deniable::is_allowed`]
//! once all observers have run and skips the effect when it is false.

pub trait Deniable {
    fn is_allowed(&self) -> bool;

    fn set_allowed(&mut self, allowed: bool);

    /// Shorthand for `set_allowed(false)`.
    fn deny(&mut self) {
        self.set_allowed(false);
    }
}
