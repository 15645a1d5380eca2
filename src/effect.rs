//! Contexts that wrap the decision of an effectful operation.
//!
//! See [`BTreeMap1::alter_effect`].
//!
//! [`BTreeMap1::alter_effect`]: crate::btree_map1::BTreeMap1::alter_effect

use core::task::Poll;

/// A context around an output that can be mapped into the same kind of context.
///
/// Mapping preserves the context: an `Err`, `None`, or `Pending` is passed through without
/// calling the mapping function.
pub trait Effect<T> {
    type Map<U>;

    fn map_effect<U, F>(self, f: F) -> Self::Map<U>
    where
        F: FnOnce(T) -> U;
}

impl<T> Effect<T> for Option<T> {
    type Map<U> = Option<U>;

    fn map_effect<U, F>(self, f: F) -> Self::Map<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Effect<T> for Poll<T> {
    type Map<U> = Poll<U>;

    fn map_effect<U, F>(self, f: F) -> Self::Map<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T, E> Effect<T> for Result<T, E> {
    type Map<U> = Result<U, E>;

    fn map_effect<U, F>(self, f: F) -> Self::Map<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

#[cfg(test)]
mod tests {
    use core::task::Poll;
    use rstest::rstest;

    use crate::effect::Effect;

    #[rstest]
    #[case::some(Some(2), Some(3))]
    #[case::none(None, None)]
    fn map_effect_option_then_output_eq(#[case] input: Option<u8>, #[case] expected: Option<u8>) {
        assert_eq!(input.map_effect(|x| x + 1), expected);
    }

    #[rstest]
    #[case::ok(Ok(2), Ok(3))]
    #[case::err(Err('e'), Err('e'))]
    fn map_effect_result_then_output_eq(
        #[case] input: Result<u8, char>,
        #[case] expected: Result<u8, char>,
    ) {
        assert_eq!(input.map_effect(|x| x + 1), expected);
    }

    #[rstest]
    fn map_effect_pending_then_f_is_not_called() {
        let output = Poll::<u8>::Pending.map_effect(|_| -> u8 { unreachable!() });
        assert_eq!(output, Poll::Pending);
    }
}
