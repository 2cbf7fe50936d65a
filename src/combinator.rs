//! Basic combinators shared by the rest of the crate.
//!
//! - [`identity`]: The identity function, the default iterator
//! - [`Truthy`]: Coercion of a value to a boolean, the default predicate

/// Returns the value unchanged.
///
/// This is the iterator used whenever an operation needs one and the caller
/// did not provide it.
///
/// # Examples
///
/// ```
/// use underbar::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Types that can be coerced to a boolean.
///
/// Used by [`every_truthy`](crate::collection::every_truthy) and
/// [`some_truthy`](crate::collection::some_truthy) as the predicate
/// `identity` followed by a boolean coercion.
///
/// | type           | falsy when          |
/// |----------------|---------------------|
/// | `bool`         | `false`             |
/// | integers       | zero                |
/// | floats         | zero or NaN         |
/// | `str`/`String` | empty               |
/// | `char`         | never               |
/// | `Option<T>`    | `None`, or `Some` of a falsy value |
///
/// # Examples
///
/// ```
/// use underbar::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(Some("x").is_truthy());
/// ```
pub trait Truthy {
    /// Returns whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
