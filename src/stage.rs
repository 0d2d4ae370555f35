//! The stage contract.
//!
//! A stage is one unit of pipeline logic with private mutable state. It is
//! handed its continuation (the rest of the chain) and a message, and it
//! decides what, if anything, to forward: nothing (suppression), the same
//! message (pass-through), a reshaped value (transform), or several pushes
//! per input (expansion). Forwarding a premature [`End`](crate::End) is how
//! a stage terminates the stream early.
//!
//! A stage only ever sees its immediate continuation. It has no view of the
//! chain's overall shape and must not retain the continuation or the
//! message past the call.

/// A pipeline stage that handles messages of shape `M`, forwarding to a
/// continuation `K`.
///
/// Implement this once per message shape the stage accepts. Shapes with no
/// implementation are rejected when the chain is composed and driven, not
/// during a traversal.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot occupy this chain position: it does not handle `{M}`",
    label = "`{M}` arrives here but `{Self}` has no handler for it",
    note = "a stage must implement `Stage` for every message shape the previous stage forwards"
)]
pub trait Stage<K, M> {
    /// Handle one message, pushing any output to `next`.
    fn process(&mut self, next: &mut K, msg: M);
}

/// A stage can be mounted by mutable borrow, leaving the caller free to
/// inspect its state once the traversal is done.
impl<K, M, S: Stage<K, M>> Stage<K, M> for &mut S {
    fn process(&mut self, next: &mut K, msg: M) {
        (**self).process(next, msg);
    }
}

/// Implements pass-through handling of `Begin` and `End` for a stage type,
/// with optional generic parameters.
macro_rules! forward_markers {
    (<$($g:ident),+> $ty:ty) => { forward_markers!(@impl [$($g),+] $ty); };
    ($ty:ty) => { forward_markers!(@impl [] $ty); };
    (@impl [$($g:ident),*] $ty:ty) => {
        impl<K: Push<Begin>, $($g),*> Stage<K, Begin> for $ty {
            fn process(&mut self, next: &mut K, marker: Begin) {
                next.push(marker);
            }
        }
        impl<K: Push<End>, $($g),*> Stage<K, End> for $ty {
            fn process(&mut self, next: &mut K, marker: End) {
                next.push(marker);
            }
        }
    };
}
pub(crate) use forward_markers;
