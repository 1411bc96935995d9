//! Shallow, public-fields-only copies of plain records.
//!
//! A copy is a new value whose public fields are cloned from the source and
//! whose remaining fields are left at `Default::default()`. Cloning a field
//! is not recursive: `Rc`/`Arc` fields in the copy point at the same
//! allocation as the source.
//!
//! Records opt in either by declaring themselves through
//! [`shallow_record!`](crate::shallow_record), which derives the field list
//! from the `pub` markers, or by implementing [`ShallowCopy`] by hand.

/// Types that can produce a shallow copy of their public fields.
pub trait ShallowCopy {
    fn shallow_copy(&self) -> Self;
}

impl<T: ShallowCopy> ShallowCopy for Box<T> {
    fn shallow_copy(&self) -> Self {
        Box::new((**self).shallow_copy())
    }
}

/// Create a new record with the public fields of `record` copied over.
pub fn copy_struct<T: ShallowCopy>(record: &T) -> T {
    record.shallow_copy()
}

/// Declare a record struct and derive its [`ShallowCopy`] impl.
///
/// The struct is emitted unchanged. The generated `shallow_copy` clones
/// every field declared plain `pub` and fills the others, including
/// `pub(crate)`/`pub(super)` fields, from `Default`. The struct must
/// implement `Default` and must not be generic.
///
/// ```
/// use dense_base::record::copy_struct;
///
/// dense_base::shallow_record! {
///     #[derive(Debug, Default)]
///     pub struct Params {
///         pub alpha: f64,
///         iterations: usize,
///     }
/// }
///
/// let source = Params { alpha: 0.5, iterations: 10 };
/// let copy = copy_struct(&source);
/// assert_eq!(copy.alpha, 0.5);
/// assert_eq!(copy.iterations, 0);
/// ```
#[macro_export]
macro_rules! shallow_record {
    (@impl $name:ident [$($copied:ident)*]) => {
        impl $crate::record::ShallowCopy for $name {
            #[allow(clippy::needless_update)]
            fn shallow_copy(&self) -> Self {
                Self {
                    $($copied: ::std::clone::Clone::clone(&self.$copied),)*
                    ..::std::default::Default::default()
                }
            }
        }
    };
    (@impl $name:ident [$($copied:ident)*]
        $(#[$field_meta:meta])* pub ($($restriction:tt)+) $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::shallow_record!(@impl $name [$($copied)*] $($($rest)*)?);
    };
    (@impl $name:ident [$($copied:ident)*]
        $(#[$field_meta:meta])* pub $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::shallow_record!(@impl $name [$($copied)* $field] $($($rest)*)?);
    };
    (@impl $name:ident [$($copied:ident)*]
        $(#[$field_meta:meta])* $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::shallow_record!(@impl $name [$($copied)*] $($($rest)*)?);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($body)*
        }

        $crate::shallow_record!(@impl $name [] $($body)*);
    };
}
